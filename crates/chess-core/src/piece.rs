//! Chess piece kinds.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the Unicode chess symbol for this piece with the given color.
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265a}',
            (Color::Black, PieceKind::Queen) => '\u{265b}',
            (Color::Black, PieceKind::Rook) => '\u{265c}',
            (Color::Black, PieceKind::Bishop) => '\u{265d}',
            (Color::Black, PieceKind::Knight) => '\u{265e}',
            (Color::Black, PieceKind::Pawn) => '\u{265f}',
        }
    }

    /// Returns the ASCII letter for this piece, uppercase for White.
    pub const fn letter(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(PieceKind::King.glyph(Color::White), '♔');
        assert_eq!(PieceKind::Pawn.glyph(Color::White), '♙');
        assert_eq!(PieceKind::Queen.glyph(Color::Black), '♛');
        assert_eq!(PieceKind::Pawn.glyph(Color::Black), '♟');
    }

    #[test]
    fn letters() {
        assert_eq!(PieceKind::Pawn.letter(Color::White), 'P');
        assert_eq!(PieceKind::Pawn.letter(Color::Black), 'p');
        assert_eq!(PieceKind::Knight.letter(Color::Black), 'n');
        assert_eq!(PieceKind::King.letter(Color::White), 'K');
    }

    #[test]
    fn display() {
        assert_eq!(PieceKind::Knight.to_string(), "Knight");
    }
}
