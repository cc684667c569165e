//! Cards and symbol placements.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use crate::Symbol;

/// Identifier of a card within a puzzle, in the range 0-11.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::CardId;
///
/// let id = CardId::try_from(3).unwrap();
/// assert_eq!(id.index(), 3);
/// assert!(CardId::try_from(12).is_err());
///
/// assert_eq!(CardId::ALL.len(), CardId::COUNT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CardId(u8);

/// Error returned when converting an out-of-range value into a [`CardId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("card id out of range: {value} (expected 0..12)")]
pub struct CardIdError {
    /// The rejected value.
    pub value: usize,
}

impl CardId {
    /// Number of cards in every puzzle.
    pub const COUNT: usize = 12;

    /// All card ids in ascending order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(0); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a card id from a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CardIdError`] if `index` is not below [`CardId::COUNT`].
    pub fn from_index(index: usize) -> Result<Self, CardIdError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CardIdError { value: index })
    }

    /// Returns the zero-based index of this card.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw id value.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CardId {
    type Error = CardIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(value))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symbol drawn on a card with display-only scale and rotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    symbol: Symbol,
    scale: f32,
    rotation: u16,
}

impl Placement {
    /// Allowed scale range.
    pub const SCALE_RANGE: RangeInclusive<f32> = 0.7..=1.3;
    /// Allowed rotation range in whole degrees.
    pub const ROTATION_RANGE: RangeInclusive<u16> = 0..=359;

    /// Creates a placement.
    #[must_use]
    pub fn new(symbol: Symbol, scale: f32, rotation: u16) -> Self {
        Self {
            symbol,
            scale,
            rotation,
        }
    }

    /// Returns the placed symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the display scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> u16 {
        self.rotation
    }
}

/// A card holding a sequence of symbol placements.
///
/// A well-formed card never holds the same symbol twice; generated puzzles
/// always satisfy this.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    id: CardId,
    placements: Vec<Placement>,
}

impl Card {
    /// Creates a card.
    #[must_use]
    pub fn new(id: CardId, placements: Vec<Placement>) -> Self {
        Self { id, placements }
    }

    /// Returns the card id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the placements in display order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns an iterator over the symbols in display order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.placements.iter().map(Placement::symbol)
    }

    /// Returns `true` if the card shows `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols().any(|s| s == symbol)
    }

    /// Returns the number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if the card has no placements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_range() {
        assert_eq!(CardId::from_index(0).unwrap().value(), 0);
        assert_eq!(CardId::from_index(11).unwrap().index(), 11);
        assert_eq!(CardId::from_index(12), Err(CardIdError { value: 12 }));
        assert!(CardId::try_from(255).is_err());
    }

    #[test]
    fn test_card_id_all_is_ascending() {
        for (i, id) in CardId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_card_id_error_message() {
        let err = CardId::try_from(40).unwrap_err();
        assert_eq!(err.to_string(), "card id out of range: 40 (expected 0..12)");
    }

    #[test]
    fn test_card_contains() {
        let sun = Symbol::from_static("☀️");
        let moon = Symbol::from_static("🌙");
        let card = Card::new(CardId::ALL[2], vec![Placement::new(sun.clone(), 1.1, 45)]);

        assert!(card.contains(&sun));
        assert!(!card.contains(&moon));
        assert_eq!(card.len(), 1);
        assert_eq!(card.symbols().collect::<Vec<_>>(), vec![&sun]);
    }
}
