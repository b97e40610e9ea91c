//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`PieceKind`] and [`Color`] for piece representation
//! - [`Position`] for board coordinates
//! - [`parse_coordinate`] for reading `<file>,<rank>` input

mod color;
mod input;
mod piece;
mod position;

pub use color::Color;
pub use input::{parse_coordinate, InputError};
pub use piece::PieceKind;
pub use position::{Position, BOARD_SIZE};
