//! Built-in symbol catalog.

const SYMBOL_POOL: [&str; 64] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔",
    "🐧", "🐦", "🦆", "🦉", "🐴", "🦄", "🐝", "🦋", "🐌", "🐞", "🐢", "🐍", "🐙", "🦀", "🐠", "🐬",
    "🐳", "🦈", "🐊", "🦒", "🦓", "🐘", "🦔", "🌵", "🌲", "🌻", "🌹", "🍀", "🍄", "🌙", "⭐", "🔥",
    "🌈", "❄", "🍎", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍍", "🥕", "🌽", "🍩", "🎈", "🎲", "🔔",
];

/// Returns the built-in catalog of candidate symbols.
///
/// Every entry is distinct.
#[must_use]
pub fn symbol_pool() -> &'static [&'static str] {
    &SYMBOL_POOL
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::Puzzle;

    #[test]
    fn test_pool_entries_are_distinct() {
        let distinct: HashSet<_> = symbol_pool().iter().collect();
        assert_eq!(distinct.len(), symbol_pool().len());
    }

    #[test]
    fn test_pool_covers_a_puzzle() {
        assert!(symbol_pool().len() >= Puzzle::SYMBOL_COUNT);
    }
}
