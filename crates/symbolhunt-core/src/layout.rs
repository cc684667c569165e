//! Slot positions for drawing symbols inside a round card.
//!
//! Coordinates are relative to the card center, with the card fitted in the
//! unit circle. Every returned coordinate lies in `[-1, 1]`.

/// A symbol slot position inside a card.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPosition {
    /// Horizontal offset from the card center.
    pub x: f32,
    /// Vertical offset from the card center.
    pub y: f32,
}

impl SlotPosition {
    /// Creates a slot position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed, non-overlapping slots used for up to nine symbols.
///
/// Center first, then the four cardinal points, then the four diagonals.
pub const SYMBOL_SLOTS: [SlotPosition; 9] = [
    SlotPosition::new(0.0, 0.0),
    SlotPosition::new(0.45, 0.0),
    SlotPosition::new(-0.45, 0.0),
    SlotPosition::new(0.0, 0.45),
    SlotPosition::new(0.0, -0.45),
    SlotPosition::new(0.32, 0.32),
    SlotPosition::new(-0.32, 0.32),
    SlotPosition::new(0.32, -0.32),
    SlotPosition::new(-0.32, -0.32),
];

const GOLDEN_ANGLE_DEGREES: f32 = 137.5;
const RING_BASE_RADIUS: f32 = 0.2;
const RING_RADIUS_STEP: f32 = 0.12;
const RING_BANDS: u16 = 3;

/// Returns `count` slot positions for the symbols of one card.
///
/// Counts up to nine take [`SYMBOL_SLOTS`] in order. Larger counts keep the
/// whole table and continue along the golden angle, cycling the radius
/// through three bands.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::{SYMBOL_SLOTS, symbol_positions};
///
/// let positions = symbol_positions(12);
/// assert_eq!(positions.len(), 12);
/// assert_eq!(positions[..9], SYMBOL_SLOTS);
/// ```
#[must_use]
pub fn symbol_positions(count: usize) -> Vec<SlotPosition> {
    let mut positions: Vec<_> = SYMBOL_SLOTS.iter().copied().take(count).collect();
    let mut ring: u16 = 1;
    while positions.len() < count {
        let angle = (f32::from(ring) * GOLDEN_ANGLE_DEGREES).to_radians();
        let radius = RING_BASE_RADIUS + f32::from(ring % RING_BANDS) * RING_RADIUS_STEP;
        positions.push(SlotPosition::new(radius * angle.cos(), radius * angle.sin()));
        ring = ring.wrapping_add(1);
    }
    positions
}
