//! Chess rules engine over an 8x8 mailbox board.
//!
//! This crate provides:
//! - [`Game`] - board state plus the last move played, and the mutators
//!   [`Game::move_piece`] and [`Game::castle`]
//! - [`Piece`] - a placed piece and its pseudo-legal move generation
//! - check and checkmate detection ([`Game::is_check`], [`Game::is_checkmate`])
//! - en passant and castling
//!
//! # Architecture
//!
//! The board owns every piece. Pieces never point back at the board; move
//! generation borrows the [`Game`] to look up occupancy instead. Move lists
//! are pseudo-legal: they respect occupancy and board edges but not whether
//! the mover's own king is left attacked. King safety is layered on top only
//! for the king's own moves during checkmate analysis.
//!
//! # Example
//!
//! ```
//! use chess_core::Position;
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! game.move_piece(Position::new(4, 1), Position::new(4, 3)).unwrap();
//! assert!(!game.is_check());
//! assert_eq!(game.last_move(), Some((Position::new(4, 1), Position::new(4, 3))));
//! ```

mod check;
mod error;
mod game;
mod movegen;
mod piece;
mod special;

pub use error::MoveError;
pub use game::Game;
pub use piece::Piece;
