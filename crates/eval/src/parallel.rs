// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use std::thread;

use crate::{BestHand, Result, Token};

/// Finds the best hand for each of the given hands using `num_tasks` parallel
/// tasks.
///
/// Each task evaluates a contiguous chunk of hands, the results are in the same
/// order as the hands.
///
/// Panics if `num_tasks` is zero.
pub fn par_best_hands<H>(hands: &[H], num_tasks: usize) -> Vec<Result<BestHand>>
where
    H: AsRef<[Token]> + Sync,
{
    assert!(num_tasks > 0);

    if hands.is_empty() {
        return Vec::new();
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = hands
            .chunks(hands_per_task)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|hand| BestHand::from_tokens(hand.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .flat_map(|task| match task.join() {
                Ok(results) => results,
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Error, Wildcard};

    #[test]
    fn par_matches_sequential() {
        let mut rng = rand::rng();
        let mut hands = Vec::new();

        for n in 0..40 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut hand = (0..7)
                .filter_map(|_| deck.deal())
                .map(Token::Card)
                .collect::<Vec<_>>();

            if n % 4 == 0 {
                hand[6] = Token::Wild(Wildcard::RED);
            }

            hands.push(hand);
        }

        // An invalid hand keeps its position in the results.
        hands.push(Vec::new());

        for num_tasks in [1, 3, 8, 64] {
            let results = par_best_hands(&hands, num_tasks);
            assert_eq!(results.len(), hands.len());

            for (hand, result) in hands.iter().zip(&results) {
                assert_eq!(&BestHand::from_tokens(hand), result);
            }

            assert!(matches!(results.last(), Some(Err(Error::Input(_)))));
        }

        assert!(par_best_hands::<Vec<Token>>(&[], 4).is_empty());
    }
}
