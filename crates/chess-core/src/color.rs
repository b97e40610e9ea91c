//! The two sides.

use std::fmt;

/// A side of the board. White starts on ranks 0 and 1 and moves towards
/// higher `y`; Black starts on ranks 7 and 6 and moves towards lower `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the `dy` of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the rank holding this side's pieces at the start.
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Returns the rank holding this side's pawns at the start.
    #[inline]
    pub const fn pawn_rank(self) -> i32 {
        self.back_rank() + self.pawn_direction()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn home_ranks() {
        assert_eq!(Color::White.back_rank(), 0);
        assert_eq!(Color::White.pawn_rank(), 1);
        assert_eq!(Color::Black.back_rank(), 7);
        assert_eq!(Color::Black.pawn_rank(), 6);
    }

    #[test]
    fn pawns_advance_towards_the_enemy() {
        for color in Color::ALL {
            let ahead = color.pawn_rank() + color.pawn_direction();
            assert!((color.back_rank() - ahead).abs() > 1);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(Color::Black.to_string(), "Black");
    }
}
