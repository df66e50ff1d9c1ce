// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Color, ParseError};

/// A Poker card.
///
/// A card is a rank and a suit, its code is the rank character followed by the
/// suit character, for example `TH` for the ten of hearts:
///
/// ```
/// # use wildpoker_cards::{Card, Rank, Suit};
/// let th: Card = "TH".parse().unwrap();
/// assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(th.to_string(), "TH");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let Some(rank) = Rank::from_char(r) else {
                    return Err(ParseError::InvalidRank(code.into()));
                };

                let Some(suit) = Suit::from_char(s) else {
                    return Err(ParseError::InvalidSuit(code.into()));
                };

                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseError::InvalidLength(code.into())),
        }
    }
}

/// Card rank.
///
/// The discriminant is the rank value used for ranking hands, from 2 for the
/// deuce to 14 for the ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for the deuce up to 14 for the ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Rank::from_char(c) {
                Some(rank) => Ok(rank),
                None => Err(ParseError::InvalidRank(s.into())),
            },
            _ => Err(ParseError::InvalidLength(s.into())),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Suit::from_char(c) {
                Some(suit) => Ok(suit),
                None => Err(ParseError::InvalidSuit(s.into())),
            },
            _ => Err(ParseError::InvalidLength(s.into())),
        }
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + Clone {
        [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            _ => None,
        }
    }

    /// The suit color.
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}
