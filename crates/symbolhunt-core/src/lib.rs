//! Core data structures for symbolhunt puzzles.
//!
//! This crate provides the value types shared by puzzle generation, the game
//! session, and any front end that renders a round.
//!
//! # Overview
//!
//! 1. **Model types** - The immutable puzzle handed to a front end
//!    - [`symbol`]: Opaque [`Symbol`] tokens drawn from the [`pool`]
//!    - [`card`]: [`CardId`], [`Placement`], and [`Card`]
//!    - [`puzzle`]: The root [`Puzzle`] aggregate and its fixed shape constants
//!
//! 2. **Queries** - Ground truth re-derived from delivered cards
//!    - [`query`]: [`occurrence_counts`], [`unique_symbols`], and friends
//!
//! 3. **Layout** - Visual slot positions for the symbols on a card
//!    - [`layout`]: [`symbol_positions`]
//!
//! 4. **Testing** - [`testing::PuzzleChecker`] asserts every puzzle invariant
//!
//! # Examples
//!
//! ```
//! use symbolhunt_core::{Card, CardId, Placement, Symbol, occurrence_counts, unique_symbols};
//!
//! let cat = Symbol::from_static("🐱");
//! let dog = Symbol::from_static("🐶");
//! let cards = [
//!     Card::new(CardId::ALL[0], vec![Placement::new(cat.clone(), 1.0, 0)]),
//!     Card::new(
//!         CardId::ALL[1],
//!         vec![Placement::new(cat.clone(), 1.0, 0), Placement::new(dog.clone(), 0.8, 90)],
//!     ),
//! ];
//!
//! assert_eq!(occurrence_counts(&cards)[&cat], 2);
//! assert!(unique_symbols(&cards).contains(&dog));
//! ```

pub mod card;
pub mod layout;
pub mod pool;
pub mod puzzle;
pub mod query;
pub mod symbol;
pub mod testing;

// Re-export commonly used types
pub use self::{
    card::{Card, CardId, CardIdError, Placement},
    layout::{SYMBOL_SLOTS, SlotPosition, symbol_positions},
    pool::symbol_pool,
    puzzle::Puzzle,
    query::{cards_without, most_repeated_symbols, occurrence_counts, unique_symbols},
    symbol::Symbol,
};
