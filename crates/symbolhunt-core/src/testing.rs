//! Test utilities for puzzle producers.
//!
//! This module provides [`PuzzleChecker`], a harness that asserts every
//! structural invariant of a [`Puzzle`] and reports the first violation.
//!
//! # Example
//!
//! ```should_panic
//! use symbolhunt_core::{Card, CardId, Placement, Puzzle, Symbol, testing::PuzzleChecker};
//!
//! let star = Symbol::from_static("⭐");
//! let puzzle = Puzzle::from_parts(
//!     vec![Card::new(CardId::ALL[0], vec![Placement::new(star.clone(), 1.0, 0)])],
//!     vec![star.clone()],
//!     star.clone(),
//!     vec![star],
//!     CardId::ALL[0],
//! );
//!
//! // A single card is not a valid deck
//! PuzzleChecker::new(&puzzle).assert_valid();
//! ```

use std::collections::{BTreeSet, HashSet};

use crate::{CardId, Placement, Puzzle, Symbol, cards_without, occurrence_counts, unique_symbols};

/// A test harness asserting the invariants of a puzzle.
///
/// The expected counts default to the standard puzzle shape and can be
/// overridden for puzzles generated with a non-default configuration.
///
/// # Panics
///
/// All assertion methods panic with a descriptive message on failure, using
/// `#[track_caller]` to report the calling test.
#[derive(Debug)]
pub struct PuzzleChecker<'a> {
    puzzle: &'a Puzzle,
    symbol_count: usize,
    unique_count: usize,
    min_card_size: usize,
}

impl<'a> PuzzleChecker<'a> {
    /// Creates a checker expecting the standard puzzle shape.
    #[must_use]
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            symbol_count: Puzzle::SYMBOL_COUNT,
            unique_count: Puzzle::UNIQUE_COUNT,
            min_card_size: Puzzle::MIN_CARD_SIZE,
        }
    }

    /// Overrides the expected symbol, unique, and minimum card sizes.
    #[must_use]
    pub fn with_shape(
        mut self,
        symbol_count: usize,
        unique_count: usize,
        min_card_size: usize,
    ) -> Self {
        self.symbol_count = symbol_count;
        self.unique_count = unique_count;
        self.min_card_size = min_card_size;
        self
    }

    /// Asserts every invariant.
    #[track_caller]
    pub fn assert_valid(&self) -> &Self {
        self.assert_card_ids()
            .assert_symbol_universe()
            .assert_card_contents()
            .assert_placement_bounds()
            .assert_unique_symbols()
            .assert_most_repeated()
            .assert_no_unique_card()
    }

    /// Asserts the deck has [`CardId::COUNT`] cards with ids in index order.
    #[track_caller]
    pub fn assert_card_ids(&self) -> &Self {
        let cards = self.puzzle.cards();
        assert_eq!(
            cards.len(),
            CardId::COUNT,
            "expected {} cards, found {}",
            CardId::COUNT,
            cards.len()
        );
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id().index(), i, "card at index {i} has id {}", card.id());
        }
        self
    }

    /// Asserts `all_symbols` has the expected size with no duplicates.
    #[track_caller]
    pub fn assert_symbol_universe(&self) -> &Self {
        let all = self.puzzle.all_symbols();
        let distinct: HashSet<&Symbol> = all.iter().collect();
        assert_eq!(all.len(), self.symbol_count, "unexpected symbol count");
        assert_eq!(distinct.len(), all.len(), "all_symbols contains duplicates");
        self
    }

    /// Asserts card sizes, no repeats within a card, and membership in `all_symbols`.
    #[track_caller]
    pub fn assert_card_contents(&self) -> &Self {
        let all: HashSet<&Symbol> = self.puzzle.all_symbols().iter().collect();
        for card in self.puzzle.cards() {
            assert!(
                card.len() >= self.min_card_size,
                "card {} has {} symbols, expected at least {}",
                card.id(),
                card.len(),
                self.min_card_size
            );
            let mut seen = HashSet::new();
            for symbol in card.symbols() {
                assert!(seen.insert(symbol), "card {} repeats {symbol}", card.id());
                assert!(all.contains(symbol), "card {} shows unknown {symbol}", card.id());
            }
        }
        self
    }

    /// Asserts every placement's scale and rotation are in range.
    #[track_caller]
    pub fn assert_placement_bounds(&self) -> &Self {
        for card in self.puzzle.cards() {
            for placement in card.placements() {
                assert!(
                    Placement::SCALE_RANGE.contains(&placement.scale()),
                    "scale {} out of range on card {}",
                    placement.scale(),
                    card.id()
                );
                assert!(
                    Placement::ROTATION_RANGE.contains(&placement.rotation()),
                    "rotation {} out of range on card {}",
                    placement.rotation(),
                    card.id()
                );
            }
        }
        self
    }

    /// Asserts the declared unique symbols match the cards, and all others repeat.
    #[track_caller]
    pub fn assert_unique_symbols(&self) -> &Self {
        let cards = self.puzzle.cards();
        let actual = unique_symbols(cards);
        let declared: BTreeSet<Symbol> = self.puzzle.unique_symbols().iter().cloned().collect();
        assert_eq!(actual.len(), self.unique_count, "unexpected unique count");
        assert_eq!(actual, declared, "declared unique symbols differ from cards");
        for (symbol, count) in occurrence_counts(cards) {
            if !actual.contains(&symbol) {
                assert!(count >= 2, "{symbol} appears on {count} cards");
            }
        }
        self
    }

    /// Asserts the most repeated symbol is strictly above every other count.
    #[track_caller]
    pub fn assert_most_repeated(&self) -> &Self {
        let counts = occurrence_counts(self.puzzle.cards());
        let most = self.puzzle.most_repeated_symbol();
        let most_count = counts.get(most).copied().unwrap_or(0);
        for (symbol, count) in &counts {
            if symbol != most {
                assert!(
                    *count < most_count,
                    "{symbol} appears on {count} cards, most repeated {most} only on {most_count}"
                );
            }
        }
        self
    }

    /// Asserts exactly the declared card carries no unique symbol.
    #[track_caller]
    pub fn assert_no_unique_card(&self) -> &Self {
        let cards = self.puzzle.cards();
        let without = cards_without(cards, &unique_symbols(cards));
        assert_eq!(
            without,
            vec![self.puzzle.no_unique_card_id()],
            "cards without unique symbols"
        );
        self
    }
}
