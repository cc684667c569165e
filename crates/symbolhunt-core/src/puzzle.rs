//! The puzzle aggregate handed to front ends.

use crate::{Card, CardId, Symbol};

/// An immutable symbolhunt puzzle.
///
/// A puzzle is a deck of [`CardId::COUNT`] cards together with the answers to
/// the three tasks of a round:
///
/// 1. the symbol that appears on strictly the most cards,
/// 2. every symbol that appears on exactly one card,
/// 3. the one card that carries no such unique symbol.
///
/// The answer fields are the generator's declaration. Verification should
/// re-derive ground truth from [`Puzzle::cards`] with the [query](crate::query)
/// helpers instead of trusting them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    cards: Vec<Card>,
    all_symbols: Vec<Symbol>,
    most_repeated_symbol: Symbol,
    unique_symbols: Vec<Symbol>,
    no_unique_card_id: CardId,
}

impl Puzzle {
    /// Number of distinct symbols used by a standard puzzle.
    pub const SYMBOL_COUNT: usize = 30;
    /// Number of symbols that appear on exactly one card.
    pub const UNIQUE_COUNT: usize = 15;
    /// Number of cards the most repeated symbol appears on.
    pub const MOST_REPEATED_COUNT: usize = 7;
    /// Minimum number of symbols on every card.
    pub const MIN_CARD_SIZE: usize = 5;

    /// Assembles a puzzle from its parts.
    ///
    /// No invariant is checked here; use [`PuzzleChecker`] in tests.
    ///
    /// [`PuzzleChecker`]: crate::testing::PuzzleChecker
    #[must_use]
    pub fn from_parts(
        cards: Vec<Card>,
        all_symbols: Vec<Symbol>,
        most_repeated_symbol: Symbol,
        unique_symbols: Vec<Symbol>,
        no_unique_card_id: CardId,
    ) -> Self {
        Self {
            cards,
            all_symbols,
            most_repeated_symbol,
            unique_symbols,
            no_unique_card_id,
        }
    }

    /// Returns the cards, indexed by [`CardId::index`].
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card with the given id, if present.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Returns every symbol used by the puzzle in display order.
    ///
    /// The order does not reveal which symbols are unique or most repeated.
    #[must_use]
    pub fn all_symbols(&self) -> &[Symbol] {
        &self.all_symbols
    }

    /// Returns `true` if `symbol` belongs to this puzzle.
    #[must_use]
    pub fn has_symbol(&self, symbol: &Symbol) -> bool {
        self.all_symbols.contains(symbol)
    }

    /// Returns the declared most repeated symbol.
    #[must_use]
    pub fn most_repeated_symbol(&self) -> &Symbol {
        &self.most_repeated_symbol
    }

    /// Returns the declared unique symbols.
    #[must_use]
    pub fn unique_symbols(&self) -> &[Symbol] {
        &self.unique_symbols
    }

    /// Returns the declared id of the card without unique symbols.
    #[must_use]
    pub fn no_unique_card_id(&self) -> CardId {
        self.no_unique_card_id
    }
}
