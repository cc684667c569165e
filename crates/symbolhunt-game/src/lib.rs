//! Round state and answer verification for symbolhunt.
//!
//! A [`Game`] holds one puzzle together with the player's answers to the
//! three tasks:
//!
//! 1. pick the most repeated symbol,
//! 2. select every unique symbol,
//! 3. pick the card without a unique symbol.
//!
//! [`Game::verify`] checks the answers against ground truth recomputed from the
//! cards and locks the round. A new round is simply a new [`Game`].
//!
//! # Examples
//!
//! ```
//! use symbolhunt_game::Game;
//! use symbolhunt_generator::PuzzleGenerator;
//!
//! let mut game = Game::start(&PuzzleGenerator::new())?;
//! let answer = game.puzzle().most_repeated_symbol().clone();
//! game.select_most_repeated(answer)?;
//!
//! let results = game.verify();
//! assert!(results.most_repeated_correct);
//! assert!(!results.no_unique_card_correct); // never answered
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod game;
mod results;
mod selection;

pub use self::{
    error::GameError,
    game::Game,
    results::{TaskResults, UniqueDiff},
    selection::{SelectionOperation, SymbolSelection},
};
