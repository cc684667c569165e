use symbolhunt_core::{CardId, Puzzle, Symbol};
use symbolhunt_generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed};

use crate::{GameError, SelectionOperation, SymbolSelection, TaskResults};

/// A symbolhunt round.
///
/// Holds the puzzle, the player's answers, and, once verified, the results.
/// Answers start empty. After [`Game::verify`] the round is locked and every
/// answer change fails with [`GameError::AlreadyVerified`].
///
/// # Example
///
/// ```
/// use symbolhunt_game::Game;
/// use symbolhunt_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("example"))?;
/// let mut game = Game::from(puzzle);
///
/// for symbol in game.puzzle().unique_symbols().to_vec() {
///     game.toggle_unique(symbol)?;
/// }
/// assert!(game.verify().unique_correct);
/// assert!(game.is_verified());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    puzzle: Puzzle,
    seed: Option<PuzzleSeed>,
    most_repeated: Option<Symbol>,
    uniques: SymbolSelection,
    no_unique_card: Option<CardId>,
    results: Option<TaskResults>,
}

impl Game {
    /// Starts a round with a freshly generated puzzle.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if generation fails.
    pub fn start(generator: &PuzzleGenerator) -> Result<Self, GeneratorError> {
        generator.generate().map(Self::from)
    }

    /// Creates a round for an existing puzzle.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            seed: None,
            most_repeated: None,
            uniques: SymbolSelection::new(),
            no_unique_card: None,
            results: None,
        }
    }

    /// Returns the puzzle of this round.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the seed the puzzle was generated from, if known.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the symbol picked as most repeated.
    #[must_use]
    pub fn most_repeated_selection(&self) -> Option<&Symbol> {
        self.most_repeated.as_ref()
    }

    /// Returns the symbols marked as unique.
    #[must_use]
    pub fn unique_selection(&self) -> &SymbolSelection {
        &self.uniques
    }

    /// Returns the card picked as having no unique symbol.
    #[must_use]
    pub fn no_unique_card_selection(&self) -> Option<CardId> {
        self.no_unique_card
    }

    /// Returns `true` once the round has been verified.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.results.is_some()
    }

    /// Returns the results if the round has been verified.
    #[must_use]
    pub fn results(&self) -> Option<&TaskResults> {
        self.results.as_ref()
    }

    /// Returns the score of a verified round, or `0` before verification.
    #[must_use]
    pub fn score(&self) -> usize {
        self.results.as_ref().map_or(0, TaskResults::score)
    }

    fn ensure_open(&self) -> Result<(), GameError> {
        if self.is_verified() {
            return Err(GameError::AlreadyVerified);
        }
        Ok(())
    }

    fn ensure_known(&self, symbol: &Symbol) -> Result<(), GameError> {
        if !self.puzzle.has_symbol(symbol) {
            return Err(GameError::UnknownSymbol {
                symbol: symbol.clone(),
            });
        }
        Ok(())
    }

    /// Picks `symbol` as the most repeated one.
    ///
    /// Picking the current choice again clears it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyVerified`] after verification, or
    /// [`GameError::UnknownSymbol`] if the symbol is not in the puzzle.
    pub fn select_most_repeated(
        &mut self,
        symbol: Symbol,
    ) -> Result<SelectionOperation, GameError> {
        self.ensure_open()?;
        self.ensure_known(&symbol)?;
        if self.most_repeated.as_ref() == Some(&symbol) {
            self.most_repeated = None;
            return Ok(SelectionOperation::Removed);
        }
        self.most_repeated = Some(symbol);
        Ok(SelectionOperation::Set)
    }

    /// Marks `symbol` as unique, or unmarks it if already marked.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyVerified`] after verification, or
    /// [`GameError::UnknownSymbol`] if the symbol is not in the puzzle.
    pub fn toggle_unique(&mut self, symbol: Symbol) -> Result<SelectionOperation, GameError> {
        self.ensure_open()?;
        self.ensure_known(&symbol)?;
        Ok(self.uniques.toggle(symbol))
    }

    /// Picks `id` as the card without unique symbols.
    ///
    /// Picking the current choice again clears it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyVerified`] after verification.
    pub fn select_no_unique_card(&mut self, id: CardId) -> Result<SelectionOperation, GameError> {
        self.ensure_open()?;
        if self.no_unique_card == Some(id) {
            self.no_unique_card = None;
            return Ok(SelectionOperation::Removed);
        }
        self.no_unique_card = Some(id);
        Ok(SelectionOperation::Set)
    }

    /// Verifies the answers and locks the round.
    ///
    /// Calling this again returns the first results unchanged.
    pub fn verify(&mut self) -> &TaskResults {
        self.results.get_or_insert_with(|| {
            let results = TaskResults::evaluate(
                &self.puzzle,
                self.most_repeated.as_ref(),
                &self.uniques,
                self.no_unique_card,
            );
            log::debug!("round verified, score={}", results.score());
            results
        })
    }
}

impl From<GeneratedPuzzle> for Game {
    fn from(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle { seed, puzzle } = generated;
        Self {
            seed: Some(seed),
            ..Self::new(puzzle)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use symbolhunt_core::unique_symbols;

    use super::*;

    fn test_game(seed: u64) -> Game {
        let mut rng = Pcg64::seed_from_u64(seed);
        let puzzle = PuzzleGenerator::new()
            .generate_with_rng(&mut rng)
            .expect("default config always generates");
        Game::new(puzzle)
    }

    fn non_unique_symbol(game: &Game) -> Symbol {
        let uniques = unique_symbols(game.puzzle().cards());
        game.puzzle()
            .all_symbols()
            .iter()
            .find(|s| !uniques.contains(*s))
            .cloned()
            .expect("puzzle has repeated symbols")
    }

    #[test]
    fn test_new_game_has_no_answers() {
        let game = test_game(0);
        assert_eq!(game.most_repeated_selection(), None);
        assert!(game.unique_selection().is_empty());
        assert_eq!(game.no_unique_card_selection(), None);
        assert!(!game.is_verified());
        assert_eq!(game.results(), None);
        assert_eq!(game.score(), 0);
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_from_generated_keeps_seed() {
        let seed = PuzzleSeed::from_phrase("round");
        let generated = PuzzleGenerator::new().generate_with_seed(seed).unwrap();
        let game = Game::from(generated.clone());
        assert_eq!(game.seed(), Some(seed));
        assert_eq!(game.puzzle(), &generated.puzzle);
    }

    #[test]
    fn test_most_repeated_correct() {
        let mut game = test_game(1);
        let answer = game.puzzle().most_repeated_symbol().clone();
        game.select_most_repeated(answer).unwrap();
        assert!(game.verify().most_repeated_correct);
    }

    #[test]
    fn test_most_repeated_wrong() {
        let mut game = test_game(2);
        let unique = game.puzzle().unique_symbols()[0].clone();
        game.select_most_repeated(unique).unwrap();
        assert!(!game.verify().most_repeated_correct);
    }

    #[test]
    fn test_select_most_repeated_toggles() {
        let mut game = test_game(3);
        let symbol = game.puzzle().all_symbols()[0].clone();
        assert!(game.select_most_repeated(symbol.clone()).unwrap().is_set());
        assert_eq!(game.most_repeated_selection(), Some(&symbol));
        assert!(game.select_most_repeated(symbol).unwrap().is_removed());
        assert_eq!(game.most_repeated_selection(), None);
    }

    #[test]
    fn test_unique_selection_exact() {
        let mut game = test_game(4);
        for symbol in game.puzzle().unique_symbols().to_vec() {
            game.toggle_unique(symbol).unwrap();
        }
        let results = game.verify();
        assert!(results.unique_correct);
        assert_eq!(results.unique_diff.correct.len(), 15);
        assert!(results.unique_diff.missed.is_empty());
        assert!(results.unique_diff.wrong.is_empty());
    }

    #[test]
    fn test_unique_selection_one_short_one_extra() {
        let mut game = test_game(5);
        let uniques = game.puzzle().unique_symbols().to_vec();
        for symbol in &uniques[1..] {
            game.toggle_unique(symbol.clone()).unwrap();
        }
        let extra = non_unique_symbol(&game);
        game.toggle_unique(extra.clone()).unwrap();

        let results = game.verify();
        assert!(!results.unique_correct);
        assert_eq!(results.unique_diff.missed, vec![uniques[0].clone()]);
        assert_eq!(results.unique_diff.wrong, vec![extra]);
        assert_eq!(results.unique_diff.correct.len(), 14);
    }

    #[test]
    fn test_no_unique_card_correct() {
        let mut game = test_game(6);
        let answer = game.puzzle().no_unique_card_id();
        game.select_no_unique_card(answer).unwrap();
        assert!(game.verify().no_unique_card_correct);
    }

    #[test]
    fn test_no_unique_card_other_ids_wrong() {
        let base = test_game(7);
        let answer = base.puzzle().no_unique_card_id();
        for id in CardId::ALL.into_iter().filter(|&id| id != answer) {
            let mut game = base.clone();
            game.select_no_unique_card(id).unwrap();
            assert!(!game.verify().no_unique_card_correct, "card {id}");
        }
    }

    #[test]
    fn test_unanswered_tasks_are_wrong() {
        let mut game = test_game(8);
        let results = game.verify().clone();
        assert!(!results.most_repeated_correct);
        assert!(!results.unique_correct);
        assert_eq!(results.unique_diff.missed.len(), 15);
        assert!(!results.no_unique_card_correct);
        assert_eq!(results.score(), 0);
    }

    #[test]
    fn test_perfect_round() {
        let mut game = test_game(9);
        let puzzle = game.puzzle().clone();
        game.select_most_repeated(puzzle.most_repeated_symbol().clone()).unwrap();
        for symbol in puzzle.unique_symbols() {
            game.toggle_unique(symbol.clone()).unwrap();
        }
        game.select_no_unique_card(puzzle.no_unique_card_id()).unwrap();

        assert!(game.verify().is_perfect());
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn test_answers_locked_after_verify() {
        let mut game = test_game(10);
        let symbol = game.puzzle().all_symbols()[0].clone();
        let first = game.verify().clone();

        assert_eq!(
            game.select_most_repeated(symbol.clone()),
            Err(GameError::AlreadyVerified)
        );
        assert_eq!(game.toggle_unique(symbol), Err(GameError::AlreadyVerified));
        assert_eq!(
            game.select_no_unique_card(CardId::ALL[0]),
            Err(GameError::AlreadyVerified)
        );
        assert_eq!(game.verify(), &first);
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let mut game = test_game(11);
        let stranger = Symbol::from_static("not-a-symbol");
        assert_eq!(
            game.toggle_unique(stranger.clone()),
            Err(GameError::UnknownSymbol {
                symbol: stranger.clone()
            })
        );
        assert!(matches!(
            game.select_most_repeated(stranger),
            Err(GameError::UnknownSymbol { .. })
        ));
        assert!(game.unique_selection().is_empty());
    }
}
