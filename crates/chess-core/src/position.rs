//! Board coordinate representation.

use std::fmt;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i32 = 8;

/// A square address on the board.
///
/// `x` is the file (0 = a, 7 = h) and `y` the rank index (0 = rank 1,
/// 7 = rank 8). Any pair of integers is representable so that requests
/// outside the board can be reported instead of rejected at construction;
/// [`Position::is_on_board`] tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a position from file and rank indices.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns true if both coordinates lie in 0-7.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Returns the position shifted by `(dx, dy)`. The result may be off the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Iterates over every square, rank 0 first and file 0 first within a rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
    }

    /// Returns the algebraic name (e.g. "e4"), or `None` off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
