use std::collections::BTreeSet;

use symbolhunt_core::{CardId, Puzzle, Symbol, query};

use crate::SymbolSelection;

/// How a unique-symbol selection compares with the actual unique symbols.
///
/// All lists are sorted by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueDiff {
    /// Selected symbols that are unique.
    pub correct: Vec<Symbol>,
    /// Unique symbols that were not selected.
    pub missed: Vec<Symbol>,
    /// Selected symbols that are not unique.
    pub wrong: Vec<Symbol>,
}

/// The outcome of verifying a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResults {
    /// Whether the most repeated symbol was picked.
    pub most_repeated_correct: bool,
    /// Whether exactly the unique symbols were selected.
    pub unique_correct: bool,
    /// Per-symbol breakdown of the unique selection.
    pub unique_diff: UniqueDiff,
    /// Whether the card without unique symbols was picked.
    pub no_unique_card_correct: bool,
}

impl TaskResults {
    /// Verifies answers against ground truth recomputed from the puzzle's cards.
    ///
    /// The puzzle's declared answers are not consulted. A missing answer is
    /// incorrect.
    #[must_use]
    pub fn evaluate(
        puzzle: &Puzzle,
        most_repeated: Option<&Symbol>,
        uniques: &SymbolSelection,
        no_unique_card: Option<CardId>,
    ) -> Self {
        let cards = puzzle.cards();
        let actual_uniques = query::unique_symbols(cards);

        let most_repeated_correct = most_repeated.is_some_and(|symbol| {
            let most = query::most_repeated_symbols(cards);
            most.len() == 1 && most.contains(symbol)
        });

        let unique_diff = UniqueDiff::compute(uniques.as_set(), &actual_uniques);
        let unique_correct = unique_diff.missed.is_empty() && unique_diff.wrong.is_empty();

        let no_unique_card_correct =
            no_unique_card.is_some_and(|id| query::cards_without(cards, &actual_uniques) == [id]);

        Self {
            most_repeated_correct,
            unique_correct,
            unique_diff,
            no_unique_card_correct,
        }
    }

    /// Returns the number of correctly solved tasks, from 0 to 3.
    #[must_use]
    pub fn score(&self) -> usize {
        [
            self.most_repeated_correct,
            self.unique_correct,
            self.no_unique_card_correct,
        ]
        .into_iter()
        .filter(|&correct| correct)
        .count()
    }

    /// Returns `true` if every task was solved.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score() == 3
    }
}

impl UniqueDiff {
    fn compute(selected: &BTreeSet<Symbol>, actual: &BTreeSet<Symbol>) -> Self {
        Self {
            correct: selected.intersection(actual).cloned().collect(),
            missed: actual.difference(selected).cloned().collect(),
            wrong: selected.difference(actual).cloned().collect(),
        }
    }
}
