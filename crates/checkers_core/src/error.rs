use thiserror::Error;

/// Rejection reasons for selection and move commands.
///
/// All variants are recoverable: a rejected command leaves the board and the
/// match state untouched, and the caller decides how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinate outside the 8x8 grid.
    #[error("coordinate outside the board")]
    OutOfBounds,
    /// The source square holds no piece.
    #[error("no piece on the source square")]
    NoPieceSelected,
    /// The source square holds a piece of the side not to move.
    #[error("piece belongs to the opponent")]
    NotYourTurn,
    /// The destination is not in the piece's current legal move set.
    #[error("destination is not a legal move")]
    IllegalMove,
    /// A mandatory multi-jump chain is active and must be finished first.
    #[error("multi-jump chain in progress")]
    ChainInProgress,
}
