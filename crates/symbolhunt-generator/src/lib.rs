//! Puzzle generation for symbolhunt.
//!
//! A puzzle is a deck of twelve cards built so that exactly one symbol is the
//! most repeated, exactly fifteen symbols appear on a single card, and exactly
//! one card carries none of those unique symbols. Generation is a single
//! constructive pass without backtracking; see [`allocation`] for the steps.
//!
//! # Overview
//!
//! - [`PuzzleGenerator`]: entry point assembling a complete [`Puzzle`]
//! - [`PuzzleSeed`]: reproducible seeds, written as 64 hex digits
//! - [`GeneratorConfig`]: the constants shaping a puzzle
//! - [`allocation`]: symbol-to-card assignment
//! - [`render_placements`]: per-card scale and rotation
//! - [`random`]: sampling helpers over any random source
//!
//! # Examples
//!
//! ```
//! use symbolhunt_core::unique_symbols;
//! use symbolhunt_generator::PuzzleGenerator;
//!
//! let generated = PuzzleGenerator::new().generate()?;
//! let puzzle = &generated.puzzle;
//!
//! assert_eq!(puzzle.cards().len(), 12);
//! assert_eq!(unique_symbols(puzzle.cards()).len(), 15);
//! println!("seed: {}", generated.seed);
//! # Ok::<(), symbolhunt_generator::GeneratorError>(())
//! ```
//!
//! [`Puzzle`]: symbolhunt_core::Puzzle

pub mod allocation;
mod config;
mod error;
mod generator;
mod placement;
pub mod random;
mod seed;

pub use self::{
    config::GeneratorConfig,
    error::{AllocationPhase, GeneratorError},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    placement::render_placements,
    seed::{PuzzleSeed, SeedParseError},
};
