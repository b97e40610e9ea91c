//! Errors raised by board mutations.

use chess_core::Position;
use thiserror::Error;

/// Reasons a move or castling request is rejected.
///
/// Every variant is raised before the board is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("no piece at {0}")]
    EmptySource(Position),

    #[error("illegal move from {from} to {to}")]
    IllegalDestination { from: Position, to: Position },

    #[error("only the king can castle, but {0} holds no king")]
    NotAKing(Position),

    #[error("invalid castling move from {from} to {to}")]
    InvalidCastleGeometry { from: Position, to: Position },

    #[error("castling is blocked at {0}")]
    BlockedCastle(Position),
}

/// Fails with [`MoveError::OutOfBounds`] naming the first off-board square.
pub(crate) fn check_bounds(src: Position, dst: Position) -> Result<(), MoveError> {
    for pos in [src, dst] {
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds(pos));
        }
    }
    Ok(())
}
