use std::ops::RangeInclusive;

use symbolhunt_core::{CardId, Placement, Puzzle};

use crate::GeneratorError;

/// Constants that shape a generated puzzle.
///
/// [`GeneratorConfig::default`] yields the standard puzzle: 30 symbols, 15 of
/// them unique, the most repeated symbol on 7 cards, and at least 5 symbols
/// per card. Other values are accepted only if [`GeneratorConfig::validate`]
/// passes, and even then generation may fail with
/// [`GeneratorError::Exhausted`] if the deck cannot be filled.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of distinct symbols drawn from the pool.
    pub symbol_count: usize,
    /// Number of symbols that appear on exactly one card.
    pub unique_count: usize,
    /// Number of cards the most repeated symbol appears on.
    pub most_repeated_count: usize,
    /// Range of card counts for the other repeated symbols.
    pub repeat_counts: RangeInclusive<usize>,
    /// Minimum number of symbols on every card.
    pub min_card_size: usize,
    /// Size the card without unique symbols is filled towards first.
    pub target_special_size: usize,
    /// Range of placement scales.
    pub scale_range: RangeInclusive<f32>,
    /// Range of placement rotations in degrees.
    pub rotation_range: RangeInclusive<u16>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            symbol_count: Puzzle::SYMBOL_COUNT,
            unique_count: Puzzle::UNIQUE_COUNT,
            most_repeated_count: Puzzle::MOST_REPEATED_COUNT,
            repeat_counts: 2..=4,
            min_card_size: Puzzle::MIN_CARD_SIZE,
            target_special_size: 6,
            scale_range: Placement::SCALE_RANGE,
            rotation_range: Placement::ROTATION_RANGE,
        }
    }
}

impl GeneratorConfig {
    /// Returns the number of symbols designated to appear on several cards.
    #[must_use]
    pub fn repeat_symbol_count(&self) -> usize {
        self.symbol_count.saturating_sub(self.unique_count)
    }

    /// Returns the highest count any symbol but the most repeated may reach.
    #[must_use]
    pub fn max_other_count(&self) -> usize {
        self.most_repeated_count.saturating_sub(1)
    }

    /// Checks that the constants are arithmetically compatible.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let invalid = |reason| Err(GeneratorError::InvalidConfig { reason });

        if self.unique_count < CardId::COUNT - 1 {
            return invalid("unique_count must cover every card but one");
        }
        if self.unique_count >= self.symbol_count {
            return invalid("symbol_count must leave at least one repeated symbol");
        }
        if !(2..=CardId::COUNT).contains(&self.most_repeated_count) {
            return invalid("most_repeated_count must be between 2 and the card count");
        }
        let (&low, &high) = (self.repeat_counts.start(), self.repeat_counts.end());
        if low < 2 || low > high {
            return invalid("repeat_counts must be a non-empty range starting at 2 or more");
        }
        // the special card top-up may add one more occurrence
        if high + 1 >= self.most_repeated_count {
            return invalid("repeat_counts must stay below most_repeated_count");
        }
        if self.min_card_size == 0 || self.min_card_size > self.repeat_symbol_count() {
            return invalid("min_card_size must be fillable from repeated symbols alone");
        }
        let (&scale_low, &scale_high) = (self.scale_range.start(), self.scale_range.end());
        if !(scale_low <= scale_high
            && Placement::SCALE_RANGE.contains(&scale_low)
            && Placement::SCALE_RANGE.contains(&scale_high))
        {
            return invalid("scale_range must lie within the placement scale range");
        }
        if self.rotation_range.is_empty() || *self.rotation_range.end() > 359 {
            return invalid("rotation_range must lie within 0..=359");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(config: &GeneratorConfig) -> &'static str {
        match config.validate() {
            Err(GeneratorError::InvalidConfig { reason }) => reason,
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.repeat_symbol_count(), 15);
        assert_eq!(config.max_other_count(), 6);
    }

    #[test]
    fn test_rejects_too_few_uniques() {
        let config = GeneratorConfig {
            unique_count: 10,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("unique_count"));
    }

    #[test]
    fn test_rejects_no_repeated_symbols() {
        let config = GeneratorConfig {
            symbol_count: 15,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("symbol_count"));
    }

    #[test]
    fn test_rejects_repeat_counts_reaching_most_repeated() {
        let config = GeneratorConfig {
            repeat_counts: 2..=6,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("most_repeated_count"));

        let config = GeneratorConfig {
            repeat_counts: 1..=3,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("starting at 2"));
    }

    #[test]
    fn test_rejects_unfillable_card_size() {
        let config = GeneratorConfig {
            min_card_size: 16,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("min_card_size"));
    }

    #[test]
    fn test_rejects_out_of_range_placements() {
        let config = GeneratorConfig {
            scale_range: 0.5..=1.0,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("scale_range"));

        let config = GeneratorConfig {
            rotation_range: 0..=360,
            ..GeneratorConfig::default()
        };
        assert!(reason(&config).contains("rotation_range"));
    }
}
