use symbolhunt_core::Symbol;

/// Errors that can occur when changing a round's answers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The symbol is not part of this round's puzzle.
    #[display("symbol {symbol} is not part of this puzzle")]
    UnknownSymbol {
        /// The rejected symbol.
        symbol: Symbol,
    },
    /// The round was already verified; answers are locked.
    #[display("answers are locked after verification")]
    AlreadyVerified,
}
