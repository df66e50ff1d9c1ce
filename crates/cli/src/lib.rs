// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker command line evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::{error, info};
use rand::prelude::*;

use wildpoker_eval::{BestHand, Deck, Token, Wildcard, par_best_hands};

/// Evaluator configuration.
#[derive(Debug)]
pub struct Config {
    /// The hand to evaluate, empty to deal random hands.
    pub cards: Vec<String>,
    /// Number of random hands to deal.
    pub random: usize,
    /// Number of wildcards in each random hand.
    pub jokers: usize,
    /// Number of evaluation tasks.
    pub tasks: usize,
}

/// Evaluates the configured hands and prints the best hand for each of them.
pub fn run(config: Config) -> Result<()> {
    if !config.cards.is_empty() {
        let tokens = config
            .cards
            .iter()
            .map(|code| code.parse::<Token>())
            .collect::<Result<Vec<_>, _>>()?;

        let best = BestHand::from_tokens(&tokens)?;
        println!("{}: {best}", format_hand(&tokens));
        return Ok(());
    }

    if config.random == 0 {
        bail!("No cards given and no random hands requested");
    }

    let mut rng = rand::rng();
    let hands = (0..config.random)
        .map(|_| deal_hand(&mut rng, config.jokers))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Evaluating {} hands with {} jokers using {} tasks",
        hands.len(),
        config.jokers,
        config.tasks
    );

    let mut failed = 0;
    for (hand, result) in hands.iter().zip(par_best_hands(&hands, config.tasks)) {
        match result {
            Ok(best) => println!("{}: {best}", format_hand(hand)),
            Err(e) => {
                error!("{}: {e}", format_hand(hand));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} hands failed evaluation");
    }

    Ok(())
}

/// Deals a seven cards hand where `jokers` cards are replaced by wildcards.
fn deal_hand<R: Rng>(rng: &mut R, jokers: usize) -> Result<Vec<Token>> {
    let mut deck = Deck::new_and_shuffled(rng);
    let mut hand = Vec::with_capacity(BestHand::HAND_SIZE);

    for _ in jokers..BestHand::HAND_SIZE {
        match deck.deal() {
            Some(card) => hand.push(Token::Card(card)),
            None => bail!("Deck is empty"),
        }
    }

    for _ in 0..jokers {
        let wild = if rng.random_bool(0.5) {
            Wildcard::BLACK
        } else {
            Wildcard::RED
        };

        hand.push(Token::Wild(wild));
    }

    Ok(hand)
}

fn format_hand(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
