// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
struct Cli {
    /// The seven cards to evaluate, use ?B and ?R for wildcards.
    cards: Vec<String>,
    /// Number of random hands to evaluate when no cards are given.
    #[clap(long, short, default_value_t = 0, conflicts_with = "cards")]
    random: usize,
    /// Number of wildcards in each random hand.
    #[clap(long, short, default_value_t = 0, conflicts_with = "cards")]
    #[clap(value_parser = clap::value_parser!(u8).range(0..=2))]
    jokers: u8,
    /// Number of evaluation tasks.
    #[clap(long, short, default_value_t = 1, conflicts_with = "cards")]
    #[clap(value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = wildpoker_cli::Config {
        cards: cli.cards,
        random: cli.random,
        jokers: cli.jokers as usize,
        tasks: cli.tasks as usize,
    };

    if let Err(e) = wildpoker_cli::run(config) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_conflict_with_random_options() {
        let cards = ["wildpoker", "6C", "7C", "8C", "9C", "TC", "5C", "?B"];
        let cli = Cli::try_parse_from(cards).unwrap();
        assert_eq!(cli.cards.len(), 7);
        assert_eq!(cli.random, 0);

        for option in [["--random", "3"], ["--jokers", "1"], ["--tasks", "2"]] {
            let args = cards.iter().chain(option.iter());
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }

        let cli = Cli::try_parse_from(["wildpoker", "-r", "5", "-j", "2", "-t", "4"]).unwrap();
        assert!(cli.cards.is_empty());
        assert_eq!((cli.random, cli.jokers, cli.tasks), (5, 2, 4));

        assert!(Cli::try_parse_from(["wildpoker", "-r", "5", "-j", "3"]).is_err());
    }
}
