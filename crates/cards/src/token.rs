// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcards and hand tokens.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseError, Rank, Suit};

/// A color class, each color covers two suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// Returns the suits for this color.
    pub fn suits(&self) -> [Suit; 2] {
        match self {
            Color::Black => [Suit::Clubs, Suit::Spades],
            Color::Red => [Suit::Hearts, Suit::Diamonds],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self {
            Color::Black => 'B',
            Color::Red => 'R',
        };

        write!(f, "{color}")
    }
}

/// A wildcard (joker) that stands for any card of its color.
///
/// A black wildcard `?B` can be used as any club or spade, a red wildcard
/// `?R` as any heart or diamond:
///
/// ```
/// # use wildpoker_cards::{Color, Wildcard};
/// let w: Wildcard = "?R".parse().unwrap();
/// assert_eq!(w.color(), Color::Red);
/// assert_eq!(w.substitutes().count(), 26);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wildcard {
    color: Color,
}

impl Wildcard {
    /// The black wildcard.
    pub const BLACK: Wildcard = Wildcard::new(Color::Black);

    /// The red wildcard.
    pub const RED: Wildcard = Wildcard::new(Color::Red);

    /// Creates a wildcard of the given color.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// The wildcard color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Checks if this wildcard can stand for the given card.
    pub fn matches(&self, card: Card) -> bool {
        card.color() == self.color
    }

    /// Returns the cards this wildcard can be substituted with.
    pub fn substitutes(&self) -> impl Iterator<Item = Card> + Clone {
        let suits = self.color.suits();
        Rank::ranks().flat_map(move |r| suits.into_iter().map(move |s| Card::new(r, s)))
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.color)
    }
}

impl FromStr for Wildcard {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "?B" => Ok(Wildcard::BLACK),
            "?R" => Ok(Wildcard::RED),
            _ => Err(ParseError::InvalidWildcard(code.into())),
        }
    }
}

/// A hand element, either a card or a wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A wildcard to be resolved.
    Wild(Wildcard),
}

impl Token {
    /// Returns the card if this token is a concrete card.
    pub fn card(&self) -> Option<Card> {
        match self {
            Token::Card(card) => Some(*card),
            Token::Wild(_) => None,
        }
    }

    /// Returns the wildcard if this token is a wildcard.
    pub fn wildcard(&self) -> Option<Wildcard> {
        match self {
            Token::Card(_) => None,
            Token::Wild(wild) => Some(*wild),
        }
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl From<Wildcard> for Token {
    fn from(wild: Wildcard) -> Self {
        Token::Wild(wild)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Wild(wild) => write!(f, "{wild}"),
        }
    }
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.starts_with('?') {
            code.parse().map(Token::Wild)
        } else {
            code.parse().map(Token::Card)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn parse_tokens() {
        assert_eq!("?B".parse::<Token>(), Ok(Token::Wild(Wildcard::BLACK)));
        assert_eq!("?R".parse::<Token>(), Ok(Token::Wild(Wildcard::RED)));
        assert_eq!(
            "QS".parse::<Token>(),
            Ok(Token::Card(Card::new(Rank::Queen, Suit::Spades)))
        );

        for code in ["?B", "?R", "2C", "TD", "AH"] {
            assert_eq!(code.parse::<Token>().unwrap().to_string(), code);
        }
    }

    #[test]
    fn parse_token_errors() {
        for code in ["?", "?G", "?b", "?BR", "??"] {
            assert_eq!(
                code.parse::<Token>(),
                Err(ParseError::InvalidWildcard(code.into())),
                "{code}"
            );
        }

        assert!("ZZ".parse::<Token>().is_err());
    }

    #[test]
    fn wildcard_substitutes() {
        for wild in [Wildcard::BLACK, Wildcard::RED] {
            let cards = wild.substitutes().collect::<HashSet<_>>();
            assert_eq!(cards.len(), 26);
            assert!(cards.iter().all(|&c| wild.matches(c)));
            assert!(cards.iter().all(|c| c.color() == wild.color()));
        }

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert!(Wildcard::BLACK.matches(jc));
        assert!(!Wildcard::RED.matches(jc));
    }

    #[test]
    fn token_accessors() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(Token::from(card).card(), Some(card));
        assert_eq!(Token::from(card).wildcard(), None);
        assert_eq!(Token::from(Wildcard::RED).card(), None);
        assert_eq!(Token::from(Wildcard::RED).wildcard(), Some(Wildcard::RED));
    }
}
