//! Ground-truth queries over delivered cards.
//!
//! These functions look only at the cards they are given, so a verifier can
//! confirm player answers without trusting anything the generator declared.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::{Card, CardId, Symbol};

/// Counts the number of cards each symbol appears on.
///
/// A symbol placed twice on the same card is counted once for that card.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::{Card, CardId, Placement, Symbol, occurrence_counts};
///
/// let bee = Symbol::from_static("🐝");
/// let cards: Vec<_> = CardId::ALL[..3]
///     .iter()
///     .map(|&id| Card::new(id, vec![Placement::new(bee.clone(), 1.0, 0)]))
///     .collect();
///
/// assert_eq!(occurrence_counts(&cards)[&bee], 3);
/// ```
#[must_use]
pub fn occurrence_counts(cards: &[Card]) -> HashMap<Symbol, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        let distinct: HashSet<&Symbol> = card.symbols().collect();
        for symbol in distinct {
            *counts.entry(symbol.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Returns the symbols that appear on exactly one card.
#[must_use]
pub fn unique_symbols(cards: &[Card]) -> BTreeSet<Symbol> {
    occurrence_counts(cards)
        .into_iter()
        .filter_map(|(symbol, count)| (count == 1).then_some(symbol))
        .collect()
}

/// Returns every symbol sharing the highest occurrence count.
///
/// A valid puzzle yields exactly one symbol. An empty deck yields none.
#[must_use]
pub fn most_repeated_symbols(cards: &[Card]) -> BTreeSet<Symbol> {
    let counts = occurrence_counts(cards);
    let Some(max) = counts.values().copied().max() else {
        return BTreeSet::new();
    };
    counts
        .into_iter()
        .filter_map(|(symbol, count)| (count == max).then_some(symbol))
        .collect()
}

/// Returns the ids of cards that show none of `symbols`.
///
/// With `symbols` set to [`unique_symbols`], a valid puzzle yields exactly
/// one card.
#[must_use]
pub fn cards_without(cards: &[Card], symbols: &BTreeSet<Symbol>) -> Vec<CardId> {
    cards
        .iter()
        .filter(|card| !card.symbols().any(|s| symbols.contains(s)))
        .map(Card::id)
        .collect()
}
