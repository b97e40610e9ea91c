//! Check and checkmate detection.
//!
//! A square is attacked when some enemy piece lists it among its
//! pseudo-legal moves. Checkmate only looks at the king's own escape
//! squares; blocking or capturing the attacker with another piece is not
//! considered.

use crate::{Game, Piece};
use chess_core::{Color, Position};
use std::ops::Deref;

impl Game {
    /// Returns the square of the first king of `color` in row-major order.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|p| p.is_king() && p.color == color)
            .map(|p| p.position)
    }

    /// Returns the first king of either color in row-major order.
    fn first_king(&self) -> Option<&Piece> {
        self.pieces().find(|p| p.is_king())
    }

    /// Returns true if any piece of color `by` can move to `target`.
    pub fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        self.pieces()
            .filter(|p| p.color == by)
            .any(|p| p.possible_moves(self).contains(&target))
    }

    /// Returns true if the first king found scanning rank 0 upwards is attacked.
    ///
    /// The king under test is whichever king comes first, regardless of its
    /// color; use [`Game::is_king_in_check`] to ask about a specific side.
    /// Returns false when the board holds no king.
    pub fn is_check(&self) -> bool {
        match self.first_king() {
            Some(king) => self.is_square_attacked(king.position, king.color.opposite()),
            None => false,
        }
    }

    /// Returns true if the king of `color` is attacked.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(pos) => self.is_square_attacked(pos, color.opposite()),
            None => false,
        }
    }

    /// Returns true if the first king found scanning rank 0 upwards is in
    /// check and every one of its own moves leaves it in check.
    pub fn is_checkmate(&mut self) -> bool {
        match self.first_king().map(|king| king.position) {
            Some(pos) => self.is_king_trapped(pos),
            None => false,
        }
    }

    /// Returns true if the king of `color` is in check and every one of its
    /// own moves leaves it in check.
    pub fn is_checkmate_for(&mut self, color: Color) -> bool {
        match self.king_position(color) {
            Some(pos) => self.is_king_trapped(pos),
            None => false,
        }
    }

    fn is_king_trapped(&mut self, king_pos: Position) -> bool {
        let Some(king) = self.piece_at(king_pos) else {
            return false;
        };
        if !self.is_square_attacked(king_pos, king.color.opposite()) {
            return false;
        }
        let escapes = king.possible_moves(self);
        escapes
            .into_iter()
            .all(|dst| self.move_puts_king_in_check(king_pos, dst))
    }

    /// Returns true if moving the piece at `king_pos` to `dst` would leave it
    /// attacked by the other color.
    ///
    /// The board is modified only for the duration of the call: whatever
    /// stood on `dst` is set aside and both squares are restored before
    /// returning. Returns false if `king_pos` is empty or either square is
    /// off the board.
    pub fn move_puts_king_in_check(&mut self, king_pos: Position, dst: Position) -> bool {
        if !king_pos.is_on_board() || !dst.is_on_board() {
            return false;
        }
        let Some(color) = self.piece_at(king_pos).map(|p| p.color) else {
            return false;
        };

        let trial = TrialMove::new(self, king_pos, dst);
        let attacked = trial.is_square_attacked(dst, color.opposite());
        tracing::trace!(from = %king_pos, to = %dst, attacked, "trial king move");
        attacked
    }
}

/// A temporary relocation that is undone when the guard is dropped.
///
/// Only the two squares and the moved piece's position are touched; the
/// last move and `has_moved` flags are left alone.
struct TrialMove<'a> {
    game: &'a mut Game,
    from: Position,
    to: Position,
    captured: Option<Piece>,
}

impl<'a> TrialMove<'a> {
    fn new(game: &'a mut Game, from: Position, to: Position) -> Self {
        let captured = game.take(to);
        if let Some(mut piece) = game.take(from) {
            piece.position = to;
            game.put(piece);
        }
        TrialMove {
            game,
            from,
            to,
            captured,
        }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        if let Some(mut piece) = self.game.take(self.to) {
            piece.position = self.from;
            self.game.put(piece);
        }
        if let Some(captured) = self.captured.take() {
            self.game.put(captured);
        }
    }
}
