use std::collections::HashSet;

use rand::Rng;
use symbolhunt_core::{Card, CardId, Puzzle, Symbol, symbol_pool};

use crate::{
    GeneratorConfig, GeneratorError, PuzzleSeed,
    allocation::{self, Allocation},
    placement::render_placements,
    random,
};

/// A generated puzzle together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// The seed used to generate the puzzle.
    pub seed: PuzzleSeed,
    /// The generated puzzle.
    pub puzzle: Puzzle,
}

/// Generates symbolhunt puzzles.
///
/// Each call allocates symbols to cards, lays out every card, and assembles
/// the immutable [`Puzzle`]. All working state is local to the call, so one
/// generator can serve any number of rounds, from any number of threads.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::testing::PuzzleChecker;
/// use symbolhunt_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let generated = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"))?;
///
/// PuzzleChecker::new(&generated.puzzle).assert_valid();
/// # Ok::<(), symbolhunt_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    pool: Vec<Symbol>,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration and the built-in pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            pool: symbol_pool()
                .iter()
                .copied()
                .map(Symbol::from_static)
                .collect(),
        }
    }

    /// Creates a generator with a custom configuration and the built-in pool.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` fails validation,
    /// or [`GeneratorError::PoolTooSmall`] if the built-in pool cannot supply
    /// `config.symbol_count` symbols.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let this = Self {
            config,
            ..Self::new()
        };
        this.check_pool()?;
        Ok(this)
    }

    /// Replaces the symbol pool. Duplicate symbols are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::PoolTooSmall`] if the pool has fewer distinct
    /// symbols than the configuration draws.
    pub fn with_pool<I>(mut self, pool: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut seen = HashSet::new();
        self.pool = pool
            .into_iter()
            .filter(|symbol| seen.insert(symbol.clone()))
            .collect();
        self.check_pool()?;
        Ok(self)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the symbol pool.
    #[must_use]
    pub fn pool(&self) -> &[Symbol] {
        &self.pool
    }

    fn check_pool(&self) -> Result<(), GeneratorError> {
        if self.pool.len() < self.config.symbol_count {
            return Err(GeneratorError::PoolTooSmall {
                needed: self.config.symbol_count,
                available: self.pool.len(),
            });
        }
        Ok(())
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Exhausted`] if the configuration cannot fill
    /// every card. Never happens with the default configuration.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate`].
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        log::debug!("generating puzzle, seed={seed}");
        let mut rng = seed.rng();
        let puzzle = self.generate_with_rng(&mut rng)?;
        Ok(GeneratedPuzzle { seed, puzzle })
    }

    /// Generates a puzzle drawing from a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate`].
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Puzzle, GeneratorError>
    where
        R: Rng + ?Sized,
    {
        let Allocation {
            card_symbols,
            symbols,
            most_repeated_symbol,
            unique_symbols,
            special_card,
        } = allocation::allocate(&self.config, &self.pool, rng)?;

        let cards = CardId::ALL
            .into_iter()
            .zip(card_symbols)
            .map(|(id, symbols)| Card::new(id, render_placements(&self.config, symbols, rng)))
            .collect();

        // display order must not reveal which symbols are unique
        let mut all_symbols = symbols;
        random::shuffle(rng, &mut all_symbols);

        log::debug!(
            "generated puzzle: most repeated {most_repeated_symbol}, card without uniques {special_card}"
        );
        Ok(Puzzle::from_parts(
            cards,
            all_symbols,
            most_repeated_symbol,
            unique_symbols,
            special_card,
        ))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use symbolhunt_core::{occurrence_counts, testing::PuzzleChecker, unique_symbols};

    use super::*;

    #[test]
    fn test_random_puzzles_are_valid() {
        let generator = PuzzleGenerator::new();
        for _ in 0..100 {
            let generated = generator.generate().unwrap();
            PuzzleChecker::new(&generated.puzzle).assert_valid();
        }
    }

    #[test]
    fn test_same_seed_gives_same_puzzle() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("same seed");
        let a = generator.generate_with_seed(seed).unwrap();
        let b = generator.generate_with_seed(seed).unwrap();
        assert_eq!(a, b);

        let c = generator
            .generate_with_seed(PuzzleSeed::from_phrase("other seed"))
            .unwrap();
        assert_ne!(a.puzzle, c.puzzle);
    }

    #[test]
    fn test_generated_puzzle_keeps_seed() {
        let seed = PuzzleSeed::from_phrase("keep");
        let generated = PuzzleGenerator::new().generate_with_seed(seed).unwrap();
        assert_eq!(generated.seed, seed);
    }

    #[test]
    fn test_occurrence_counts_match_manual_recount() {
        let mut rng = Pcg64::seed_from_u64(10);
        let puzzle = PuzzleGenerator::new().generate_with_rng(&mut rng).unwrap();
        let cards = puzzle.cards();
        let first = cards[0].placements()[0].symbol();

        let manual = cards.iter().filter(|card| card.contains(first)).count();
        assert_eq!(occurrence_counts(cards)[first], manual);
    }

    #[test]
    fn test_unique_query_holds_exactly_count_one_symbols() {
        let mut rng = Pcg64::seed_from_u64(11);
        let puzzle = PuzzleGenerator::new().generate_with_rng(&mut rng).unwrap();
        let counts = occurrence_counts(puzzle.cards());
        let uniques = unique_symbols(puzzle.cards());

        for (symbol, count) in &counts {
            assert_eq!(uniques.contains(symbol), *count == 1);
        }
        assert!(uniques.iter().all(|s| counts.contains_key(s)));
    }

    #[test]
    fn test_card_ids_match_positions() {
        let mut rng = Pcg64::seed_from_u64(12);
        let puzzle = PuzzleGenerator::new().generate_with_rng(&mut rng).unwrap();
        for id in CardId::ALL {
            assert_eq!(puzzle.card(id).map(Card::id), Some(id));
        }
    }

    #[test]
    fn test_with_pool_drops_duplicates() {
        let symbols: Vec<Symbol> = symbol_pool()[..40]
            .iter()
            .chain(&symbol_pool()[..10])
            .copied()
            .map(Symbol::from_static)
            .collect();
        let generator = PuzzleGenerator::new().with_pool(symbols).unwrap();
        assert_eq!(generator.pool().len(), 40);

        let mut rng = Pcg64::seed_from_u64(13);
        let puzzle = generator.generate_with_rng(&mut rng).unwrap();
        PuzzleChecker::new(&puzzle).assert_valid();
    }

    #[test]
    fn test_with_pool_rejects_small_pool() {
        let symbols = ["🍎", "🍋", "🍎"].into_iter().map(Symbol::from_static);
        let err = PuzzleGenerator::new().with_pool(symbols).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::PoolTooSmall {
                needed: 30,
                available: 2
            }
        );
    }

    #[test]
    fn test_with_config_validates() {
        let config = GeneratorConfig {
            most_repeated_count: 13,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            PuzzleGenerator::with_config(config),
            Err(GeneratorError::InvalidConfig { .. })
        ));

        let config = GeneratorConfig {
            symbol_count: 80,
            unique_count: 40,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            PuzzleGenerator::with_config(config),
            Err(GeneratorError::PoolTooSmall { needed: 80, .. })
        ));
    }

    #[test]
    fn test_larger_cards() {
        let config = GeneratorConfig {
            min_card_size: 6,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::with_config(config).unwrap();
        for seed in 0..20 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let puzzle = generator.generate_with_rng(&mut rng).unwrap();
            PuzzleChecker::new(&puzzle)
                .with_shape(30, 15, 6)
                .assert_valid();
        }
    }

    #[test]
    fn test_exhaustion_is_surfaced() {
        let config = GeneratorConfig {
            min_card_size: 12,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::with_config(config).unwrap();
        let err = generator
            .generate_with_seed(PuzzleSeed::from_phrase("too big"))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Exhausted { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_seeded_puzzles_are_valid(bytes in any::<[u8; 32]>()) {
            let generated = PuzzleGenerator::new()
                .generate_with_seed(PuzzleSeed::from_bytes(bytes))
                .unwrap();
            PuzzleChecker::new(&generated.puzzle).assert_valid();
        }

        #[test]
        fn prop_most_repeated_count_is_fixed(seed in any::<u64>()) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let puzzle = PuzzleGenerator::new().generate_with_rng(&mut rng).unwrap();
            let counts = occurrence_counts(puzzle.cards());
            prop_assert_eq!(counts[puzzle.most_repeated_symbol()], Puzzle::MOST_REPEATED_COUNT);
            prop_assert!(counts.values().all(|&c| c <= Puzzle::MOST_REPEATED_COUNT));
        }
    }
}
