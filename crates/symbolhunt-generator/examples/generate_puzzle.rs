//! Example demonstrating symbolhunt puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle from a random seed, a hex seed, or a phrase
//! - Display the cards and the answers
//! - Sample many puzzles in parallel and summarize their shape
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2026-10-16"
//! ```
//!
//! Sample puzzles and print statistics (default sample size: 10000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --stats --samples 10000
//! ```

use std::{collections::BTreeMap, process};

use clap::Parser;
use rayon::prelude::*;
use symbolhunt_core::{Card, occurrence_counts};
use symbolhunt_generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Sample many puzzles and print count statistics instead.
    #[arg(long)]
    stats: bool,

    /// Number of puzzles to sample with `--stats`.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    if args.stats {
        if args.samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_stats(&generator, args.samples);
        return;
    }

    let seed = match (args.seed, args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(&phrase),
        (None, None) => PuzzleSeed::random(),
    };
    match generator.generate_with_seed(seed) {
        Ok(generated) => print_puzzle(&generated),
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    let puzzle = &generated.puzzle;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Cards:");
    for card in puzzle.cards() {
        let symbols: Vec<_> = card.symbols().map(ToString::to_string).collect();
        println!("  {:>2}: {}", card.id(), symbols.join(" "));
    }
    println!();

    let uniques: Vec<_> = puzzle.unique_symbols().iter().map(ToString::to_string).collect();
    println!("Answers:");
    println!("  Most repeated: {}", puzzle.most_repeated_symbol());
    println!("  Unique: {}", uniques.join(" "));
    println!("  Card without uniques: {}", puzzle.no_unique_card_id());
}

fn print_stats(generator: &PuzzleGenerator, samples: usize) {
    let results: Vec<_> = (0..samples)
        .into_par_iter()
        .map(|_| -> Result<_, GeneratorError> {
            let generated = generator.generate()?;
            let cards = generated.puzzle.cards();
            let counts = occurrence_counts(cards);
            let runner_up = counts
                .iter()
                .filter(|(symbol, _)| *symbol != generated.puzzle.most_repeated_symbol())
                .map(|(_, count)| *count)
                .max()
                .unwrap_or(0);
            let sizes: Vec<usize> = cards.iter().map(Card::len).collect();
            Ok((runner_up, sizes))
        })
        .collect();

    let mut failures = 0;
    let mut runner_ups = BTreeMap::<usize, usize>::new();
    let mut card_sizes = BTreeMap::<usize, usize>::new();
    for result in results {
        match result {
            Ok((runner_up, sizes)) => {
                *runner_ups.entry(runner_up).or_default() += 1;
                for size in sizes {
                    *card_sizes.entry(size).or_default() += 1;
                }
            }
            Err(GeneratorError::Exhausted { .. }) => failures += 1,
            Err(e) => {
                eprintln!("Generation failed: {e}");
                process::exit(1);
            }
        }
    }

    println!("Samples: {samples}");
    println!("Failures: {failures}");
    println!();
    println!("Second highest symbol count:");
    for (count, n) in &runner_ups {
        println!("  {count}: {n}");
    }
    println!();
    println!("Card sizes:");
    for (size, n) in &card_sizes {
        println!("  {size}: {n}");
    }
}
