//! Sampling helpers over any [`rand`] random source.
//!
//! All helpers are stateless; the caller owns the random source, so a seeded
//! generator gives reproducible results.

use std::ops::RangeInclusive;

use rand::{
    Rng, RngExt as _,
    distr::uniform::SampleUniform,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use symbolhunt_core::CardId;

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

/// Picks `n` distinct elements of `items` in random order.
///
/// Returns every element, shuffled, if `n` exceeds the length.
pub fn sample<T, R>(rng: &mut R, items: &[T], n: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut items = items.to_vec();
    shuffle(rng, &mut items);
    items.truncate(n);
    items
}

/// Picks one element of `items`, or `None` if it is empty.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// Draws a value uniformly from an inclusive range.
///
/// Works for integers and floats alike.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn random_in<T, R>(rng: &mut R, range: RangeInclusive<T>) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    rng.random_range(range)
}

/// Picks `count` distinct cards, always including every card in `must_include`.
///
/// The result is shuffled so the forced cards carry no positional meaning.
pub fn pick_card_indices<R>(rng: &mut R, count: usize, must_include: &[CardId]) -> Vec<CardId>
where
    R: Rng + ?Sized,
{
    let available: Vec<CardId> = CardId::ALL
        .into_iter()
        .filter(|id| !must_include.contains(id))
        .collect();
    let remaining = count.saturating_sub(must_include.len());

    let mut picked = must_include.to_vec();
    picked.extend(sample(rng, &available, remaining));
    shuffle(rng, &mut picked);
    picked
}

/// Picks one card not in `exclude`, or `None` if every card is excluded.
pub fn pick_random_card<R>(rng: &mut R, exclude: &[CardId]) -> Option<CardId>
where
    R: Rng + ?Sized,
{
    let available: Vec<CardId> = CardId::ALL
        .into_iter()
        .filter(|id| !exclude.contains(id))
        .collect();
    choose(rng, &available).copied()
}
