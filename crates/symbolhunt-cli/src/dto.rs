use serde::Serialize;
use symbolhunt_core::{Card, CardId, Placement, Puzzle, SlotPosition, Symbol, symbol_positions};
use symbolhunt_game::TaskResults;
use symbolhunt_generator::GeneratedPuzzle;

/// JSON view of a generated puzzle, including where each symbol is drawn.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PuzzleDto {
    pub(crate) seed: String,
    pub(crate) cards: Vec<CardDto>,
    pub(crate) all_symbols: Vec<Symbol>,
    pub(crate) solution: SolutionDto,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CardDto {
    pub(crate) id: CardId,
    pub(crate) symbols: Vec<PlacedSymbolDto>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PlacedSymbolDto {
    #[serde(flatten)]
    pub(crate) placement: Placement,
    pub(crate) position: SlotPosition,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SolutionDto {
    pub(crate) most_repeated_symbol: Symbol,
    pub(crate) unique_symbols: Vec<Symbol>,
    pub(crate) no_unique_card_id: CardId,
}

/// JSON view of a verified round.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResultsDto {
    pub(crate) seed: String,
    pub(crate) most_repeated_correct: bool,
    pub(crate) unique_correct: bool,
    pub(crate) unique_missed: Vec<Symbol>,
    pub(crate) unique_wrong: Vec<Symbol>,
    pub(crate) no_unique_card_correct: bool,
    pub(crate) score: usize,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        let positions = symbol_positions(card.len());
        let symbols = card
            .placements()
            .iter()
            .zip(positions)
            .map(|(placement, position)| PlacedSymbolDto {
                placement: placement.clone(),
                position,
            })
            .collect();
        Self {
            id: card.id(),
            symbols,
        }
    }
}

impl From<&Puzzle> for SolutionDto {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            most_repeated_symbol: puzzle.most_repeated_symbol().clone(),
            unique_symbols: puzzle.unique_symbols().to_vec(),
            no_unique_card_id: puzzle.no_unique_card_id(),
        }
    }
}

impl From<&GeneratedPuzzle> for PuzzleDto {
    fn from(generated: &GeneratedPuzzle) -> Self {
        let puzzle = &generated.puzzle;
        Self {
            seed: generated.seed.to_string(),
            cards: puzzle.cards().iter().map(CardDto::from).collect(),
            all_symbols: puzzle.all_symbols().to_vec(),
            solution: SolutionDto::from(puzzle),
        }
    }
}

impl ResultsDto {
    pub(crate) fn new(seed: String, results: &TaskResults) -> Self {
        Self {
            seed,
            most_repeated_correct: results.most_repeated_correct,
            unique_correct: results.unique_correct,
            unique_missed: results.unique_diff.missed.clone(),
            unique_wrong: results.unique_diff.wrong.clone(),
            no_unique_card_correct: results.no_unique_card_correct,
            score: results.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use symbolhunt_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn generated() -> GeneratedPuzzle {
        PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_phrase("dto"))
            .unwrap()
    }

    #[test]
    fn test_card_dto_has_position_per_placement() {
        let generated = generated();
        let dto = PuzzleDto::from(&generated);
        assert_eq!(dto.cards.len(), CardId::COUNT);
        for (card, card_dto) in generated.puzzle.cards().iter().zip(&dto.cards) {
            assert_eq!(card_dto.id, card.id());
            assert_eq!(card_dto.symbols.len(), card.len());
            for placed in &card_dto.symbols {
                assert!((-1.0..=1.0).contains(&placed.position.x));
                assert!((-1.0..=1.0).contains(&placed.position.y));
            }
        }
    }

    #[test]
    fn test_puzzle_json_shape() {
        let generated = generated();
        let json = serde_json::to_value(PuzzleDto::from(&generated)).unwrap();

        assert_eq!(json["seed"], generated.seed.to_string());
        assert_eq!(json["all_symbols"].as_array().unwrap().len(), 30);
        assert_eq!(json["cards"][0]["id"], 0);
        let placed = &json["cards"][0]["symbols"][0];
        assert!(placed["symbol"].is_string());
        assert!(placed["scale"].is_number());
        assert!(placed["rotation"].is_number());
        assert!(placed["position"]["x"].is_number());
        assert_eq!(
            json["solution"]["unique_symbols"].as_array().unwrap().len(),
            15
        );
    }
}
