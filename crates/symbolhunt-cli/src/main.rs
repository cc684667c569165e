//! Terminal front end for symbolhunt.
//!
//! `symbolhunt generate` prints a puzzle, `symbolhunt check` replays a puzzle
//! from its seed and scores a set of answers.
//!
//! Exit codes: `0` on success (or a perfect score), `1` when `check` finds a
//! wrong answer, `2` on invalid input.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use symbolhunt_core::{CardId, Symbol};
use symbolhunt_game::{Game, GameError, TaskResults};
use symbolhunt_generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed};

use self::dto::{PuzzleDto, ResultsDto};

mod dto;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print it.
    Generate(GenerateArgs),
    /// Regenerate a puzzle from its seed and score answers against it.
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Seed as 64 hex digits. A random seed is used if omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Seed of the puzzle, as 64 hex digits.
    #[arg(
        long,
        value_name = "HEX",
        conflicts_with = "phrase",
        required_unless_present = "phrase"
    )]
    seed: Option<PuzzleSeed>,

    /// Phrase the puzzle was generated from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Answer for task 1: the most repeated symbol.
    #[arg(long, value_name = "SYMBOL")]
    most_repeated: Option<String>,

    /// Answer for task 2: a unique symbol. Repeat for each symbol.
    #[arg(long = "unique", value_name = "SYMBOL")]
    uniques: Vec<String>,

    /// Answer for task 3: the card without a unique symbol.
    #[arg(long, value_name = "ID", value_parser = parse_card_id)]
    card: Option<CardId>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to generate puzzle: {_0}")]
    Generate(GeneratorError),
    #[display("invalid answer: {_0}")]
    Answer(GameError),
    #[display("failed to encode JSON: {_0}")]
    Json(serde_json::Error),
}

fn parse_card_id(s: &str) -> Result<CardId, Box<dyn std::error::Error + Send + Sync>> {
    let value = s.parse::<u8>()?;
    Ok(CardId::try_from(value)?)
}

fn resolve_seed(seed: Option<PuzzleSeed>, phrase: Option<&str>) -> Option<PuzzleSeed> {
    seed.or_else(|| phrase.map(PuzzleSeed::from_phrase))
}

fn join_symbols<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> String {
    symbols
        .into_iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mark(correct: bool) -> &'static str {
    if correct { "correct" } else { "wrong" }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    let puzzle = &generated.puzzle;
    println!("seed: {}", generated.seed);
    println!();
    for card in puzzle.cards() {
        println!("card {:>2}: {}", card.id(), join_symbols(card.symbols()));
    }
    println!();
    println!("solution:");
    println!("  most repeated:       {}", puzzle.most_repeated_symbol());
    println!("  unique symbols:      {}", join_symbols(puzzle.unique_symbols()));
    println!("  card without unique: {}", puzzle.no_unique_card_id());
}

fn print_results(results: &TaskResults) {
    println!("most repeated:       {}", mark(results.most_repeated_correct));
    print!("unique symbols:      {}", mark(results.unique_correct));
    let diff = &results.unique_diff;
    if !results.unique_correct {
        print!(
            " (missed: [{}], wrong: [{}])",
            join_symbols(&diff.missed),
            join_symbols(&diff.wrong)
        );
    }
    println!();
    println!("card without unique: {}", mark(results.no_unique_card_correct));
    println!("score: {}/3", results.score());
}

fn generate(generator: &PuzzleGenerator, args: &GenerateArgs) -> Result<(), CliError> {
    let generated = match resolve_seed(args.seed, args.phrase.as_deref()) {
        Some(seed) => generator.generate_with_seed(seed)?,
        None => generator.generate()?,
    };
    log::info!("generated puzzle, seed={}", generated.seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&PuzzleDto::from(&generated))?);
    } else {
        print_puzzle(&generated);
    }
    Ok(())
}

/// Scores the answers and returns whether all three tasks were solved.
fn check(generator: &PuzzleGenerator, args: CheckArgs) -> Result<bool, CliError> {
    let seed = resolve_seed(args.seed, args.phrase.as_deref())
        .unwrap_or_else(PuzzleSeed::random);
    let mut game = Game::from(generator.generate_with_seed(seed)?);

    if let Some(symbol) = args.most_repeated {
        game.select_most_repeated(Symbol::from(symbol))?;
    }
    for symbol in args.uniques {
        game.toggle_unique(Symbol::from(symbol))?;
    }
    if let Some(id) = args.card {
        game.select_no_unique_card(id)?;
    }

    let results = game.verify();
    log::info!("checked answers, seed={seed}, score={}", results.score());

    if args.json {
        let dto = ResultsDto::new(seed.to_string(), results);
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        print_results(results);
    }

    Ok(results.is_perfect())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let generator = PuzzleGenerator::new();

    let result = match cli.command {
        Command::Generate(args) => generate(&generator, &args).map(|()| true),
        Command::Check(args) => check(&generator, args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
