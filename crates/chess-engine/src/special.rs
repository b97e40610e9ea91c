//! En passant and castling.

use crate::error::check_bounds;
use crate::{Game, MoveError};
use chess_core::{PieceKind, Position, BOARD_SIZE};

impl Game {
    /// Returns the en passant capture implied by the last move as
    /// `(capture_square, pawn_square)`.
    ///
    /// The list holds one entry when the last move was a pawn advancing two
    /// ranks: the square it skipped over and the square it landed on. It is
    /// empty otherwise.
    pub fn get_en_passant_moves(&self) -> Vec<(Position, Position)> {
        let Some((src, dst)) = self.last_move() else {
            return Vec::new();
        };
        match self.piece_at(dst) {
            Some(piece) if piece.is_pawn() && (dst.y - src.y).abs() == 2 => {
                vec![(Position::new(dst.x, (src.y + dst.y) / 2), dst)]
            }
            _ => Vec::new(),
        }
    }

    /// Returns the square of the pawn captured en passant if the pawn on
    /// `src` moving to `dst` is such a capture.
    pub(crate) fn en_passant_victim(&self, src: Position, dst: Position) -> Option<Position> {
        let mover = self.piece_at(src)?;
        if !mover.is_pawn() || src.x == dst.x || !self.is_empty(dst) {
            return None;
        }
        self.get_en_passant_moves()
            .into_iter()
            .find(|&(capture, pawn)| capture == dst && self.is_enemy(pawn, mover.color))
            .map(|(_, pawn)| pawn)
    }

    /// Castles the king on `src` to `dst`, two files along its rank, moving
    /// the rook from that side's corner onto the square the king crosses.
    ///
    /// Whether the king is in check, passes through check, or either piece
    /// has moved before is not checked.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either square is off the board.
    /// - [`MoveError::NotAKing`] if `src` does not hold a king.
    /// - [`MoveError::InvalidCastleGeometry`] if `dst` is not two files away
    ///   on the same rank, or no rook of the king's color stands in the corner.
    /// - [`MoveError::BlockedCastle`] if a square between king and rook, or
    ///   `dst` itself, is occupied.
    ///
    /// Every check runs before the board is touched.
    pub fn castle(&mut self, src: Position, dst: Position) -> Result<(), MoveError> {
        check_bounds(src, dst)?;
        let king = match self.piece_at(src) {
            Some(piece) if piece.is_king() => piece,
            _ => return Err(MoveError::NotAKing(src)),
        };
        let color = king.color;

        let geometry = MoveError::InvalidCastleGeometry { from: src, to: dst };
        if dst.y != src.y || (dst.x - src.x).abs() != 2 {
            return Err(geometry);
        }

        let step = (dst.x - src.x).signum();
        let rook_src = Position::new(if step > 0 { BOARD_SIZE - 1 } else { 0 }, src.y);
        match self.piece_at(rook_src) {
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color => {}
            _ => return Err(geometry),
        }

        let rook_dst = src.offset(step, 0);
        let mut between = rook_dst;
        while between != rook_src {
            if !self.is_empty(between) {
                return Err(MoveError::BlockedCastle(between));
            }
            between = between.offset(step, 0);
        }
        if !self.is_empty(dst) {
            return Err(MoveError::BlockedCastle(dst));
        }

        self.relocate(src, dst);
        self.relocate(rook_src, rook_dst);
        self.set_last_move(src, dst);

        tracing::debug!(
            %color,
            king_from = %src,
            king_to = %dst,
            rook_from = %rook_src,
            rook_to = %rook_dst,
            "castled"
        );
        Ok(())
    }
}
