// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example sample_wild
// ```

use rand::prelude::*;
use std::time::Instant;

use wildpoker_eval::*;

fn main() {
    // Best hand categories for random hands with 0, 1, and 2 wildcards.
    const NUM_HANDS: usize = 10_000;

    let mut rng = rand::rng();

    for jokers in 0..=2 {
        let now = Instant::now();
        let mut counts = [0usize; 9];

        for _ in 0..NUM_HANDS {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut hand = (jokers..7)
                .filter_map(|_| deck.deal())
                .map(Token::Card)
                .collect::<Vec<_>>();

            for _ in 0..jokers {
                let wild = if rng.random_bool(0.5) {
                    Wildcard::BLACK
                } else {
                    Wildcard::RED
                };
                hand.push(Token::Wild(wild));
            }

            match BestHand::from_tokens(&hand) {
                Ok(best) => counts[best.value().rank() as usize] += 1,
                Err(e) => eprintln!("{e}"),
            }
        }

        let elapsed = now.elapsed().as_secs_f64();
        let total = counts.iter().sum::<usize>();
        println!("Jokers:          {jokers}");
        println!("Total hands      {total}");
        println!("Elapsed:         {:.3}s", elapsed);
        println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

        for rank in HandRank::ranks() {
            println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
        }

        println!();
    }
}
