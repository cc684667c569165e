//! Assignment of symbols to cards.
//!
//! [`allocate`] decides which symbols appear on which cards in a single
//! forward pass with no backtracking:
//!
//! 1. Draw the puzzle symbols and split them into unique and repeated ones.
//! 2. Pick the most repeated symbol and the special card (no unique symbol).
//! 3. Put the most repeated symbol on [`most_repeated_count`] random cards.
//! 4. Put every other repeated symbol on a random number of cards within
//!    [`repeat_counts`], forcing the special card until it reaches
//!    [`target_special_size`].
//! 5. Top the special card up to [`min_card_size`] with repeated symbols.
//! 6. Give every non-special card one unique symbol, then hand the rest to the
//!    smallest non-special cards.
//! 7. Pad undersized cards with repeated symbols whose count stays below
//!    [`most_repeated_count`].
//!
//! [`most_repeated_count`]: GeneratorConfig::most_repeated_count
//! [`repeat_counts`]: GeneratorConfig::repeat_counts
//! [`target_special_size`]: GeneratorConfig::target_special_size
//! [`min_card_size`]: GeneratorConfig::min_card_size

use std::collections::{BTreeSet, HashMap};

use rand::Rng;
use symbolhunt_core::{CardId, Symbol};

use crate::{AllocationPhase, GeneratorConfig, GeneratorError, random};

/// The outcome of [`allocate`]: symbol sets per card plus the task answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Symbols of each card, indexed by [`CardId::index`].
    pub card_symbols: Vec<BTreeSet<Symbol>>,
    /// Every symbol drawn for the puzzle, unique ones first.
    pub symbols: Vec<Symbol>,
    /// The symbol placed on strictly the most cards.
    pub most_repeated_symbol: Symbol,
    /// Symbols placed on exactly one card.
    pub unique_symbols: Vec<Symbol>,
    /// The card holding no unique symbol.
    pub special_card: CardId,
}

/// Per-card symbol sets and per-symbol card counts for one allocation.
#[derive(Debug)]
struct DeckBuilder {
    cards: Vec<BTreeSet<Symbol>>,
    counts: HashMap<Symbol, usize>,
}

impl DeckBuilder {
    fn new() -> Self {
        Self {
            cards: vec![BTreeSet::new(); CardId::COUNT],
            counts: HashMap::new(),
        }
    }

    /// Adds `symbol` to `card`. Adding a symbol the card already holds is a no-op.
    fn add(&mut self, symbol: &Symbol, card: CardId) {
        if self.cards[card.index()].insert(symbol.clone()) {
            *self.counts.entry(symbol.clone()).or_insert(0) += 1;
        }
    }

    fn card_len(&self, card: CardId) -> usize {
        self.cards[card.index()].len()
    }

    fn has(&self, card: CardId, symbol: &Symbol) -> bool {
        self.cards[card.index()].contains(symbol)
    }

    fn count(&self, symbol: &Symbol) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }
}

/// Assigns symbols from `pool` to cards.
///
/// The pool must contain distinct symbols.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidConfig`] if `config` fails
/// [`GeneratorConfig::validate`], [`GeneratorError::PoolTooSmall`] if the pool
/// has fewer than `config.symbol_count` symbols, and
/// [`GeneratorError::Exhausted`] if a card cannot be filled without breaking an
/// invariant.
pub fn allocate<R>(
    config: &GeneratorConfig,
    pool: &[Symbol],
    rng: &mut R,
) -> Result<Allocation, GeneratorError>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    if pool.len() < config.symbol_count {
        return Err(GeneratorError::PoolTooSmall {
            needed: config.symbol_count,
            available: pool.len(),
        });
    }

    let symbols = random::sample(rng, pool, config.symbol_count);
    let (uniques, repeats) = symbols.split_at(config.unique_count);
    let most_repeated = &repeats[0];
    let special = CardId::ALL[random::random_in(rng, 0..=CardId::COUNT - 1)];
    log::trace!("special card {special}, most repeated symbol {most_repeated}");

    let mut deck = DeckBuilder::new();

    for card in random::pick_card_indices(rng, config.most_repeated_count, &[]) {
        deck.add(most_repeated, card);
    }

    for symbol in &repeats[1..] {
        let count = random::random_in(rng, config.repeat_counts.clone());
        let forced = (deck.card_len(special) < config.target_special_size).then_some(special);
        for card in random::pick_card_indices(rng, count, forced.as_slice()) {
            deck.add(symbol, card);
        }
    }
    log::trace!("repeated symbols placed, special card holds {}", deck.card_len(special));

    top_up_special_card(config, repeats, special, &mut deck, rng)?;
    distribute_uniques(uniques, special, &mut deck, rng);
    pad_cards(config, repeats, &mut deck, rng)?;

    Ok(Allocation {
        card_symbols: deck.cards,
        most_repeated_symbol: most_repeated.clone(),
        unique_symbols: uniques.to_vec(),
        special_card: special,
        symbols,
    })
}

fn top_up_special_card<R>(
    config: &GeneratorConfig,
    repeats: &[Symbol],
    special: CardId,
    deck: &mut DeckBuilder,
    rng: &mut R,
) -> Result<(), GeneratorError>
where
    R: Rng + ?Sized,
{
    let out_of_candidates = || exhausted(AllocationPhase::TopUp, special);

    while deck.card_len(special) < config.min_card_size {
        let available: Vec<&Symbol> = repeats.iter().filter(|s| !deck.has(special, s)).collect();
        let symbol = *random::choose(rng, &available).ok_or_else(out_of_candidates)?;
        deck.add(symbol, special);

        // never leave a repeated symbol on the special card alone
        if deck.count(symbol) < 2 {
            let other =
                random::pick_random_card(rng, &[special]).ok_or_else(out_of_candidates)?;
            deck.add(symbol, other);
        }
    }
    Ok(())
}

fn distribute_uniques<R>(
    uniques: &[Symbol],
    special: CardId,
    deck: &mut DeckBuilder,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    let mut targets: Vec<CardId> = CardId::ALL
        .into_iter()
        .filter(|&id| id != special)
        .collect();
    random::shuffle(rng, &mut targets);

    let mut pending = uniques.iter();
    for (&card, symbol) in targets.iter().zip(&mut pending) {
        deck.add(symbol, card);
    }
    // targets holds every card but the special one, so it is never empty
    for symbol in pending {
        let mut smallest = targets[0];
        for &card in &targets[1..] {
            if deck.card_len(card) < deck.card_len(smallest) {
                smallest = card;
            }
        }
        deck.add(symbol, smallest);
    }
}

fn pad_cards<R>(
    config: &GeneratorConfig,
    repeats: &[Symbol],
    deck: &mut DeckBuilder,
    rng: &mut R,
) -> Result<(), GeneratorError>
where
    R: Rng + ?Sized,
{
    let max_count = config.max_other_count();
    for card in CardId::ALL {
        while deck.card_len(card) < config.min_card_size {
            let available: Vec<&Symbol> = repeats
                .iter()
                .filter(|s| !deck.has(card, s) && deck.count(s) < max_count)
                .collect();
            let symbol = *random::choose(rng, &available)
                .ok_or_else(|| exhausted(AllocationPhase::Padding, card))?;
            deck.add(symbol, card);
        }
    }
    Ok(())
}

fn exhausted(phase: AllocationPhase, card: CardId) -> GeneratorError {
    log::warn!("allocation exhausted during {phase} on card {card}");
    GeneratorError::Exhausted { phase, card }
}
