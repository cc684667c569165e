use symbolhunt_core::CardId;

/// Errors that can occur while generating a puzzle.
///
/// With the default configuration and the built-in pool none of these is
/// reachable. A caller that does hit [`GeneratorError::Exhausted`] may simply
/// generate again with a fresh seed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The configuration constants are incompatible.
    #[display("invalid generator config: {reason}")]
    InvalidConfig {
        /// The violated rule.
        reason: &'static str,
    },
    /// The symbol pool has fewer distinct symbols than a puzzle needs.
    #[display("symbol pool too small: need {needed}, have {available}")]
    PoolTooSmall {
        /// Number of symbols a puzzle draws.
        needed: usize,
        /// Number of distinct symbols in the pool.
        available: usize,
    },
    /// No eligible symbol or card was left while filling a card.
    #[display("no eligible candidate left during {phase} for card {card}")]
    Exhausted {
        /// The allocation phase that ran out of candidates.
        phase: AllocationPhase,
        /// The card being filled.
        card: CardId,
    },
}

/// An allocation phase that can run out of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AllocationPhase {
    /// Filling the card without unique symbols up to the minimum size.
    #[display("special card top-up")]
    TopUp,
    /// Padding undersized cards with repeated symbols.
    #[display("padding")]
    Padding,
}
