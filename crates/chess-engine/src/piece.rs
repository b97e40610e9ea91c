//! A piece standing on (or about to be placed on) the board.

use chess_core::{Color, PieceKind, Position};

/// A chess piece with its color and current square.
///
/// Pieces do not reference the board they stand on; every query that
/// needs occupancy takes the [`Game`](crate::Game) as a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    /// Set once the engine has moved the piece. Pawns use it, together with
    /// their starting rank, to gate the two-square advance.
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    /// Returns the Unicode symbol for this piece.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.kind.glyph(self.color)
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_has_not_moved() {
        let p = Piece::new(PieceKind::Pawn, Color::White, Position::new(1, 1));
        assert!(!p.has_moved);
        assert!(p.is_pawn());
        assert!(!p.is_king());
    }

    #[test]
    fn display_uses_glyph() {
        let k = Piece::new(PieceKind::King, Color::Black, Position::new(4, 7));
        assert_eq!(k.to_string(), "♚");
    }
}
