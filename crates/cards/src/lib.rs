// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use wildpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! wildcards that stand for any card of a color, and the [Token] type that holds
//! either of them:
//!
//! ```
//! # use wildpoker_cards::{Token, Wildcard};
//! let tokens = "6C 7C 8C 9C TC 5C ?B"
//!     .split_whitespace()
//!     .map(str::parse)
//!     .collect::<Result<Vec<Token>, _>>()
//!     .unwrap();
//! assert_eq!(tokens[6], Token::Wild(Wildcard::BLACK));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod token;
pub use token::{Color, Token, Wildcard};

/// Error returned when parsing a card or wildcard code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The code is not two characters long.
    #[error("invalid code {0:?}, expected two characters")]
    InvalidLength(String),
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank in card {0:?}")]
    InvalidRank(String),
    /// The suit character is not one of `CSHD`.
    #[error("invalid suit in card {0:?}")]
    InvalidSuit(String),
    /// A `?` code that is not `?B` or `?R`.
    #[error("invalid wildcard {0:?}, expected ?B or ?R")]
    InvalidWildcard(String),
}
