// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    Card, Error, RankDescriptor, Resolver, Result, Token,
    subsets::{for_each_ksubset, nck},
};

/// The best five cards out of a seven cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BestHandRepr")]
pub struct BestHand {
    cards: [Card; 5],
    value: RankDescriptor,
}

impl BestHand {
    /// Number of tokens in an input hand.
    pub const HAND_SIZE: usize = 7;

    /// Finds the best hand for seven concrete cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let tokens = cards.iter().copied().map(Token::Card).collect::<Vec<_>>();
        Self::from_tokens(&tokens)
    }

    /// Finds the best hand for seven tokens that may include wildcards.
    ///
    /// When more than one five cards hand has the best value the first one found
    /// is returned.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self> {
        if tokens.len() != Self::HAND_SIZE {
            return Err(Error::Input(format!(
                "expected {} cards, got {}",
                Self::HAND_SIZE,
                tokens.len()
            )));
        }

        let hands = Resolver::new(tokens)?.hands();
        debug!(
            "Evaluating {} hands, {} subsets each",
            hands.len(),
            nck(Self::HAND_SIZE, RankDescriptor::HAND_SIZE)
        );

        let mut best: Option<BestHand> = None;
        for hand in &hands {
            for_each_ksubset(hand.len(), RankDescriptor::HAND_SIZE, |p| {
                let cards = [hand[p[0]], hand[p[1]], hand[p[2]], hand[p[3]], hand[p[4]]];
                let value = RankDescriptor::eval5(&cards);

                if best.is_none_or(|b| value > b.value) {
                    best = Some(BestHand { cards, value });
                }
            });
        }

        let best = best.ok_or_else(|| Error::Input("no valid hand to evaluate".into()))?;
        debug!("Best hand {best}");
        Ok(best)
    }

    /// The five cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand value.
    pub fn value(&self) -> RankDescriptor {
        self.value
    }

    /// The cards codes sorted in string order.
    pub fn codes(&self) -> Vec<String> {
        let mut codes = self.cards.iter().map(Card::to_string).collect::<Vec<_>>();
        codes.sort();
        codes
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.codes().join(" "), self.value.rank())
    }
}

/// Deserialized form of a [BestHand], checked before use.
#[derive(Deserialize)]
struct BestHandRepr {
    cards: [Card; 5],
    value: RankDescriptor,
}

impl TryFrom<BestHandRepr> for BestHand {
    type Error = Error;

    fn try_from(repr: BestHandRepr) -> Result<Self> {
        let value = RankDescriptor::eval(&repr.cards)?;
        if value != repr.value {
            return Err(Error::Input(format!(
                "hand value {} doesn't match cards value {value}",
                repr.value
            )));
        }

        Ok(BestHand {
            cards: repr.cards,
            value,
        })
    }
}

/// Returns the best five cards hand for a seven cards hand.
///
/// The hand cannot include wildcards, see [best_wild_hand].
pub fn best_hand<S: AsRef<str>>(hand: &[S]) -> Result<BestHand> {
    let tokens = parse_tokens(hand)?;
    if let Some(wild) = tokens.iter().find_map(Token::wildcard) {
        return Err(Error::Input(format!("wildcard {wild} not allowed")));
    }

    BestHand::from_tokens(&tokens)
}

/// Returns the best five cards hand for a seven cards hand with wildcards.
///
/// The hand can include up to two wildcards, `?B` for a black card and `?R` for
/// a red card.
pub fn best_wild_hand<S: AsRef<str>>(hand: &[S]) -> Result<BestHand> {
    let tokens = parse_tokens(hand)?;
    BestHand::from_tokens(&tokens)
}

fn parse_tokens<S: AsRef<str>>(hand: &[S]) -> Result<Vec<Token>> {
    hand.iter()
        .map(|code| code.as_ref().parse::<Token>().map_err(Error::from))
        .collect()
}
