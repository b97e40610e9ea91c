//! Parsing of `<file-letter>,<rank-number>` coordinates typed by a player.

use crate::Position;
use thiserror::Error;

/// Errors that can occur when parsing a typed coordinate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid coordinate '{0}': expected <file>,<rank> such as e,2")]
    MissingSeparator(String),

    #[error("invalid file '{0}': expected a single letter")]
    InvalidFile(String),

    #[error("invalid rank '{0}': expected a number")]
    InvalidRank(String),
}

/// Parses a coordinate of the form `e,2` into a [`Position`].
///
/// The file letter is case-insensitive and maps `a` to `x = 0`; the rank
/// number maps `1` to `y = 0`. Whitespace around either part is ignored.
/// Well-formed input naming a square off the board (such as `i,9`) is
/// returned as-is so the engine can report it as out of bounds.
pub fn parse_coordinate(input: &str) -> Result<Position, InputError> {
    let (file, rank) = input
        .split_once(',')
        .ok_or_else(|| InputError::MissingSeparator(input.trim().to_string()))?;

    let file = file.trim();
    let mut chars = file.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
        _ => return Err(InputError::InvalidFile(file.to_string())),
    };

    let rank = rank.trim();
    let number = rank
        .parse::<i32>()
        .map_err(|_| InputError::InvalidRank(rank.to_string()))?;

    Ok(Position::new(
        (letter as u8 - b'a') as i32,
        number.saturating_sub(1),
    ))
}
