// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker hand evaluator.
//!
//! Finds the best five cards hand out of a seven cards hand that may include
//! wildcards. A black wildcard `?B` stands for any club or spade and a red
//! wildcard `?R` for any heart or diamond.
//!
//! Use [best_hand] for hands without wildcards and [best_wild_hand] for hands
//! with up to two wildcards:
//!
//! ```
//! # use wildpoker_eval::*;
//! let best = best_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "JS"]).unwrap();
//! assert_eq!(best.value().rank(), HandRank::StraightFlush);
//! assert_eq!(best.codes(), ["6C", "7C", "8C", "9C", "TC"]);
//!
//! let best = best_wild_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "?B"]).unwrap();
//! assert_eq!(best.codes(), ["7C", "8C", "9C", "JC", "TC"]);
//! ```
//!
//! Hands are ranked with [RankDescriptor], a hand category followed by tiebreak
//! rank values. Note that the ace always ranks high so that `A 2 3 4 5` is not
//! a straight.
//!
//! The **`parallel`** feature enables [par_best_hands] to evaluate many hands
//! with a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod best;
pub use best::{BestHand, best_hand, best_wild_hand};

pub mod rank;
pub use rank::{HandRank, RankDescriptor};

pub mod wild;
pub use wild::Resolver;

mod subsets;

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_best_hands;

// Reexport cards types.
pub use wildpoker_cards::{Card, Color, Deck, ParseError, Rank, Suit, Token, Wildcard};

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A card or wildcard code could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The hand is not a valid input hand.
    #[error("invalid hand: {0}")]
    Input(String),
}

/// Evaluation result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
