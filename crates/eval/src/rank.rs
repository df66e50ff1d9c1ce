// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{Card, Error, Result};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Number of tiebreak values for this category.
    fn tiebreak_len(&self) -> usize {
        match self {
            HandRank::StraightFlush | HandRank::Straight => 1,
            HandRank::FourOfAKind | HandRank::FullHouse => 2,
            HandRank::Flush | HandRank::HighCard => 5,
            HandRank::ThreeOfAKind | HandRank::OnePair => 6,
            HandRank::TwoPair => 7,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The largest tiebreak, two pair ranks followed by the five ranks.
const MAX_TIEBREAK: usize = 7;

/// A five cards hand rank descriptor.
///
/// The descriptor is the hand category followed by a tiebreak sequence of rank
/// values, descriptors compare by category first and then lexicographically by
/// tiebreak, a higher value is a better hand:
///
/// ```
/// # use wildpoker_eval::*;
/// let parse = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse().unwrap())
///         .collect::<Vec<Card>>()
/// };
///
/// let flush = RankDescriptor::eval(&parse("2H 5H 7H 9H JH")).unwrap();
/// let straight = RankDescriptor::eval(&parse("TC JD QH KS AC")).unwrap();
/// assert_eq!(flush.rank(), HandRank::Flush);
/// assert!(flush > straight);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "DescriptorRepr", into = "DescriptorRepr")]
pub struct RankDescriptor {
    rank: HandRank,
    tiebreak: [u8; MAX_TIEBREAK],
    len: u8,
}

impl RankDescriptor {
    /// Number of cards in a ranked hand.
    pub const HAND_SIZE: usize = 5;

    /// Ranks a five cards hand.
    ///
    /// Fails if the hand doesn't have five cards or if a card is repeated.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        if cards.len() != Self::HAND_SIZE {
            return Err(Error::Input(format!(
                "expected {} cards to rank, got {}",
                Self::HAND_SIZE,
                cards.len()
            )));
        }

        for (pos, card) in cards.iter().enumerate() {
            if cards[pos + 1..].contains(card) {
                return Err(Error::Input(format!("card {card} is repeated")));
            }
        }

        let mut hand = [cards[0]; Self::HAND_SIZE];
        hand.copy_from_slice(cards);
        Ok(Self::eval5(&hand))
    }

    /// Ranks five distinct cards.
    pub(crate) fn eval5(cards: &[Card; 5]) -> Self {
        let ranks = RankCounts::new(cards);
        let desc = ranks.descending();
        let high = desc[0];

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let is_straight = desc.windows(2).all(|w| w[0] == w[1] + 1);

        if is_straight && is_flush {
            Self::new(HandRank::StraightFlush, &[high])
        } else if let Some(quads) = ranks.kind(4) {
            let kicker = ranks.kind(1).unwrap_or_default();
            Self::new(HandRank::FourOfAKind, &[quads, kicker])
        } else if let (Some(trips), Some(pair)) = (ranks.kind(3), ranks.kind(2)) {
            Self::new(HandRank::FullHouse, &[trips, pair])
        } else if is_flush {
            Self::new(HandRank::Flush, &desc)
        } else if is_straight {
            Self::new(HandRank::Straight, &[high])
        } else if let Some(trips) = ranks.kind(3) {
            Self::with_ranks(HandRank::ThreeOfAKind, &[trips], &desc)
        } else if let Some((hi, lo)) = ranks.two_pair() {
            Self::with_ranks(HandRank::TwoPair, &[hi, lo], &desc)
        } else if let Some(pair) = ranks.kind(2) {
            Self::with_ranks(HandRank::OnePair, &[pair], &desc)
        } else {
            Self::new(HandRank::HighCard, &desc)
        }
    }

    fn new(rank: HandRank, tiebreak: &[u8]) -> Self {
        let mut desc = Self {
            rank,
            tiebreak: [0; MAX_TIEBREAK],
            len: tiebreak.len() as u8,
        };

        desc.tiebreak[..tiebreak.len()].copy_from_slice(tiebreak);
        desc
    }

    fn with_ranks(rank: HandRank, groups: &[u8], ranks: &[u8; 5]) -> Self {
        let mut tiebreak = [0; MAX_TIEBREAK];
        tiebreak[..groups.len()].copy_from_slice(groups);
        tiebreak[groups.len()..groups.len() + ranks.len()].copy_from_slice(ranks);
        Self::new(rank, &tiebreak[..groups.len() + ranks.len()])
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak rank values.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl PartialEq for RankDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankDescriptor {}

impl Hash for RankDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.tiebreak().hash(state);
    }
}

impl Ord for RankDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreak().cmp(other.tiebreak()))
    }
}

impl PartialOrd for RankDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RankDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreak())
    }
}

/// Serialized form of a [RankDescriptor].
#[derive(Serialize, Deserialize)]
struct DescriptorRepr {
    rank: HandRank,
    tiebreak: Vec<u8>,
}

impl From<RankDescriptor> for DescriptorRepr {
    fn from(desc: RankDescriptor) -> Self {
        Self {
            rank: desc.rank,
            tiebreak: desc.tiebreak().to_vec(),
        }
    }
}

impl TryFrom<DescriptorRepr> for RankDescriptor {
    type Error = Error;

    fn try_from(repr: DescriptorRepr) -> Result<Self> {
        let expected = repr.rank.tiebreak_len();
        if repr.tiebreak.len() != expected {
            return Err(Error::Input(format!(
                "{} expects {expected} tiebreak values, got {}",
                repr.rank,
                repr.tiebreak.len()
            )));
        }

        if let Some(v) = repr.tiebreak.iter().find(|v| !(2..=14).contains(*v)) {
            return Err(Error::Input(format!("invalid tiebreak rank value {v}")));
        }

        Ok(Self::new(repr.rank, &repr.tiebreak))
    }
}

/// Maps a rank value to the number of cards with that rank.
struct RankCounts {
    counts: [u8; 15],
    desc: [u8; 5],
}

impl RankCounts {
    fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0; 15];
        let mut desc = [0; 5];

        for (pos, card) in cards.iter().enumerate() {
            let value = card.rank().value();
            counts[value as usize] += 1;
            desc[pos] = value;
        }

        desc.sort_unstable_by(|a, b| b.cmp(a));
        Self { counts, desc }
    }

    /// The hand rank values in descending order.
    fn descending(&self) -> [u8; 5] {
        self.desc
    }

    /// The highest rank value that appears exactly n times.
    fn kind(&self, n: u8) -> Option<u8> {
        (2..=14u8).rev().find(|&v| self.counts[v as usize] == n)
    }

    /// The two pair ranks, high pair first, if exactly two ranks appear twice.
    fn two_pair(&self) -> Option<(u8, u8)> {
        let mut pairs = (2..=14u8).rev().filter(|&v| self.counts[v as usize] == 2);
        match (pairs.next(), pairs.next(), pairs.next()) {
            (Some(hi), Some(lo), None) => Some((hi, lo)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, Suit};
    use rand::prelude::*;

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> RankDescriptor {
        RankDescriptor::eval(&hand(s)).unwrap()
    }

    #[test]
    fn hand_categories() {
        let sf = eval("9C 8C 7C 6C 5C");
        assert_eq!(sf.rank(), HandRank::StraightFlush);
        assert_eq!(sf.tiebreak(), &[9]);

        let quads = eval("7C 7D 7H 7S JD");
        assert_eq!(quads.rank(), HandRank::FourOfAKind);
        assert_eq!(quads.tiebreak(), &[7, 11]);

        let full = eval("TD TC TH 8C 8S");
        assert_eq!(full.rank(), HandRank::FullHouse);
        assert_eq!(full.tiebreak(), &[10, 8]);

        let flush = eval("2H KH 7H 9H JH");
        assert_eq!(flush.rank(), HandRank::Flush);
        assert_eq!(flush.tiebreak(), &[13, 11, 9, 7, 2]);

        let straight = eval("6C 7D 8H 9S TC");
        assert_eq!(straight.rank(), HandRank::Straight);
        assert_eq!(straight.tiebreak(), &[10]);

        let trips = eval("QC QD QH 3S 9C");
        assert_eq!(trips.rank(), HandRank::ThreeOfAKind);
        assert_eq!(trips.tiebreak(), &[12, 12, 12, 12, 9, 3]);

        let two_pair = eval("4C 4D KH KS 9C");
        assert_eq!(two_pair.rank(), HandRank::TwoPair);
        assert_eq!(two_pair.tiebreak(), &[13, 4, 13, 13, 9, 4, 4]);

        let pair = eval("AC AD 5H 3S 9C");
        assert_eq!(pair.rank(), HandRank::OnePair);
        assert_eq!(pair.tiebreak(), &[14, 14, 14, 9, 5, 3]);

        let high = eval("AC 2D 5H 3S 9C");
        assert_eq!(high.rank(), HandRank::HighCard);
        assert_eq!(high.tiebreak(), &[14, 9, 5, 3, 2]);
    }

    #[test]
    fn ace_low_run_is_not_a_straight() {
        let wheel = eval("AC 2D 3H 4S 5C");
        assert_eq!(wheel.rank(), HandRank::HighCard);
        assert_eq!(wheel.tiebreak(), &[14, 5, 4, 3, 2]);

        let suited_wheel = eval("AH 2H 3H 4H 5H");
        assert_eq!(suited_wheel.rank(), HandRank::Flush);

        let broadway = eval("AH KH QH JH TH");
        assert_eq!(broadway.rank(), HandRank::StraightFlush);
        assert_eq!(broadway.tiebreak(), &[14]);
    }

    #[test]
    fn tiebreak_ordering() {
        // Same category compares the tiebreak values in order.
        assert!(eval("TD TC TH 8C 8S") > eval("7C 7D 7H 8C 8S"));
        assert!(eval("7C 7D 7H AC AS") > eval("7C 7D 7H KC KS"));
        assert!(eval("7C 7D 7H 7S AD") > eval("7C 7D 7H 7S KD"));
        assert!(eval("AC AD 5H 3S 9C") > eval("KC KD QH JS 9C"));
        assert!(eval("AC AD 5H 3S 9C") > eval("AH AS 5C 3D 8C"));
        assert!(eval("KC KD 4H 4S 2C") > eval("QC QD JH JS AC"));
        assert!(eval("2H 5H 7H 9H KH") > eval("2C 5C 7C 9C QC"));
        assert!(eval("TC JD QH KS AC") > eval("9C TD JH QS KC"));

        // Different suits with the same ranks are tied.
        assert_eq!(
            eval("AC 2D 5H 3S 9C").cmp(&eval("AD 2C 5S 3H 9D")),
            Ordering::Equal
        );
    }

    #[test]
    fn categories_dominate_tiebreaks() {
        // Weakest hand of each category beats the strongest of the one below.
        let ladder = [
            "AC KD QH JS 9C",
            "2C 2D 3H 4S 5C",
            "AC AD KH KS QC",
            "2C 2D 2H 3S 4C",
            "AC AD AH KS QC",
            "2C 3D 4H 5S 6C",
            "TC JD QH KS AC",
            "2H 3H 4H 5H 7H",
            "AH KH QH JH 9H",
            "2C 2D 2H 3S 3C",
            "AC AD AH KS KC",
            "2C 2D 2H 2S 3C",
            "AC AD AH AS KC",
            "2C 3C 4C 5C 6C",
        ];

        let values = ladder.iter().map(|h| eval(h)).collect::<Vec<_>>();
        for w in values.windows(2) {
            assert!(w[0] < w[1], "{} < {}", w[0], w[1]);
        }
    }

    #[test]
    fn rank_invalid_input() {
        assert!(matches!(
            RankDescriptor::eval(&hand("AC KD QH JS")),
            Err(Error::Input(_))
        ));
        assert!(matches!(
            RankDescriptor::eval(&hand("AC KD QH JS 9C 8C")),
            Err(Error::Input(_))
        ));
        assert!(matches!(
            RankDescriptor::eval(&hand("AC KD QH AC 9C")),
            Err(Error::Input(_))
        ));
    }

    #[test]
    fn descriptor_serde() {
        let two_pair = eval("4C 4D KH KS 9C");
        let json = serde_json::to_string(&two_pair).unwrap();
        assert_eq!(json, r#"{"rank":"TwoPair","tiebreak":[13,4,13,13,9,4,4]}"#);
        assert_eq!(serde_json::from_str::<RankDescriptor>(&json).unwrap(), two_pair);

        // Tiebreak length must match the category.
        let invalid = [
            r#"{"rank":"HighCard","tiebreak":[14,9,5,3,2,2,2,2]}"#,
            r#"{"rank":"HighCard","tiebreak":[14,9,5]}"#,
            r#"{"rank":"StraightFlush","tiebreak":[]}"#,
            r#"{"rank":"OnePair","tiebreak":[14,14,14,9,5,1]}"#,
            r#"{"rank":"Flush","tiebreak":[15,9,5,3,2]}"#,
        ];

        for json in invalid {
            assert!(serde_json::from_str::<RankDescriptor>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn descriptor_eq_agrees_with_ord() {
        let mut rng = rand::rng();
        let mut values = ahash::HashSet::default();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let value = RankDescriptor::eval(&cards).unwrap();

            // A value rebuilt from its parts is the same value.
            let rebuilt = RankDescriptor::new(value.rank(), value.tiebreak());
            assert_eq!(value.cmp(&rebuilt), Ordering::Equal);
            assert_eq!(value, rebuilt);
            values.insert(value);
            assert!(values.contains(&rebuilt));
        }

        let high = eval("AC 2D 5H 3S 9C");
        let other = eval("AD 2C 5S 3H 9D");
        assert_eq!(high.cmp(&other), Ordering::Equal);
        assert_eq!(high, other);
        assert_eq!(
            ahash::RandomState::with_seeds(1, 2, 3, 4).hash_one(high),
            ahash::RandomState::with_seeds(1, 2, 3, 4).hash_one(other)
        );
    }

    #[test]
    fn random_hands_order_is_total() {
        let mut rng = rand::rng();
        let mut values = Vec::new();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            values.push(RankDescriptor::eval(&cards).unwrap());
        }

        values.shuffle(&mut rng);
        values.sort();

        for w in values.windows(2) {
            assert!(w[0] <= w[1]);
            assert!(w[0].rank() <= w[1].rank());
        }
    }

    #[test]
    fn descriptor_accessors() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ];

        let value = RankDescriptor::eval5(&cards);
        assert_eq!(value, RankDescriptor::eval(&cards).unwrap());
        assert_eq!(value.to_string(), "Straight Flush [14]");
        assert_eq!(HandRank::ranks().count(), 9);
        assert_eq!(HandRank::ranks().last(), Some(HandRank::StraightFlush));
    }
}
