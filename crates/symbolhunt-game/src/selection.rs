use std::collections::BTreeSet;

use symbolhunt_core::Symbol;

/// The effect of a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOperation {
    /// The value became selected.
    Set,
    /// The value was deselected.
    Removed,
}

/// The set of symbols a player marked as unique.
///
/// Two selections are equal when they hold the same symbols, regardless of
/// the order the symbols were toggled in.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::Symbol;
/// use symbolhunt_game::{SelectionOperation, SymbolSelection};
///
/// let mut selection = SymbolSelection::new();
/// let frog = Symbol::from_static("🐸");
///
/// assert_eq!(selection.toggle(frog.clone()), SelectionOperation::Set);
/// assert!(selection.contains(&frog));
/// assert_eq!(selection.toggle(frog.clone()), SelectionOperation::Removed);
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSelection {
    symbols: BTreeSet<Symbol>,
}

impl SymbolSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol` if absent, removes it if present.
    pub fn toggle(&mut self, symbol: Symbol) -> SelectionOperation {
        if self.symbols.remove(&symbol) {
            SelectionOperation::Removed
        } else {
            self.symbols.insert(symbol);
            SelectionOperation::Set
        }
    }

    /// Returns `true` if `symbol` is selected.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Returns the number of selected symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the selected symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Returns the selected symbols as a set.
    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<Symbol> {
        &self.symbols
    }
}

impl FromIterator<Symbol> for SymbolSelection {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_equality_ignores_toggle_order() {
        let a = Symbol::from_static("A");
        let b = Symbol::from_static("B");

        let mut first = SymbolSelection::new();
        first.toggle(a.clone());
        first.toggle(b.clone());

        let mut second = SymbolSelection::new();
        second.toggle(b);
        second.toggle(a);

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores(
            initial in proptest::collection::btree_set("[a-f]", 0..6),
            symbol in "[a-h]",
        ) {
            let before: SymbolSelection = initial.into_iter().map(Symbol::from).collect();
            let mut after = before.clone();
            let first = after.toggle(Symbol::from(symbol.clone()));
            let second = after.toggle(Symbol::from(symbol));

            prop_assert_ne!(first, second);
            prop_assert_eq!(after, before);
        }
    }
}
