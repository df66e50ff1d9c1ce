// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcards resolution.
//!
//! A [Resolver] splits a hand into its concrete cards and its wildcards, and
//! expands the wildcards into every concrete hand they can stand for. Each
//! wildcard can be any of the 26 cards of its color, assignments that repeat a
//! card already in the hand are dropped, as are hands that are the same set of
//! cards as a hand already emitted.
use ahash::AHashSet;
use log::trace;

use crate::{Card, Error, Result, Token, Wildcard};

/// The maximum number of wildcards in a hand.
pub const MAX_WILDCARDS: usize = 2;

/// Expands a hand with wildcards into concrete hands.
#[derive(Debug, Clone)]
pub struct Resolver {
    cards: Vec<Card>,
    wildcards: Vec<Wildcard>,
}

impl Resolver {
    /// The minimum number of concrete cards in a hand.
    pub const MIN_CARDS: usize = 5;

    /// Creates a resolver for the given hand.
    ///
    /// Fails if the hand has a repeated concrete card, more than
    /// [MAX_WILDCARDS] wildcards, or less than [Self::MIN_CARDS] concrete cards.
    pub fn new(tokens: &[Token]) -> Result<Self> {
        let mut cards = Vec::with_capacity(tokens.len());
        let mut wildcards = Vec::new();

        for token in tokens {
            match token {
                Token::Card(card) if cards.contains(card) => {
                    return Err(Error::Input(format!("card {card} is repeated")));
                }
                Token::Card(card) => cards.push(*card),
                Token::Wild(wild) => wildcards.push(*wild),
            }
        }

        if wildcards.len() > MAX_WILDCARDS {
            return Err(Error::Input(format!(
                "{} wildcards, at most {MAX_WILDCARDS} allowed",
                wildcards.len()
            )));
        }

        if cards.len() < Self::MIN_CARDS {
            return Err(Error::Input(format!(
                "{} concrete cards, at least {} required",
                cards.len(),
                Self::MIN_CARDS
            )));
        }

        Ok(Self { cards, wildcards })
    }

    /// The concrete cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The wildcards.
    pub fn wildcards(&self) -> &[Wildcard] {
        &self.wildcards
    }

    /// Returns all the distinct concrete hands this hand can stand for.
    ///
    /// A hand without wildcards resolves to itself. Each hand returned has its
    /// concrete cards first, in input order, followed by the wildcards
    /// substitutes.
    pub fn hands(&self) -> Vec<Vec<Card>> {
        if self.wildcards.is_empty() {
            return vec![self.cards.clone()];
        }

        let mut seen = AHashSet::default();
        let mut hands = Vec::new();
        let mut hand = self.cards.clone();

        self.resolve(0, &mut hand, &mut |hand| {
            let mut key = hand.to_vec();
            key.sort_unstable();

            if seen.insert(key) {
                hands.push(hand.to_vec());
            }
        });

        trace!(
            "Resolved {} wildcards into {} hands",
            self.wildcards.len(),
            hands.len()
        );

        hands
    }

    /// Substitutes the wildcards from `pos` onwards, calling `f` with each
    /// complete hand that has no repeated card.
    fn resolve<F>(&self, pos: usize, hand: &mut Vec<Card>, f: &mut F)
    where
        F: FnMut(&[Card]),
    {
        let Some(wild) = self.wildcards.get(pos) else {
            f(hand);
            return;
        };

        for card in wild.substitutes() {
            if hand.contains(&card) {
                continue;
            }

            hand.push(card);
            self.resolve(pos + 1, hand, f);
            hand.pop();
        }
    }
}
