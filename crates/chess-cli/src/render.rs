//! Text rendering of the board.

use crate::config::{Glyphs, PlayConfig};
use chess_core::{Position, BOARD_SIZE};
use chess_engine::Game;

const FILES: &str = "a b c d e f g h";

/// Renders `game` one rank per line, rank 0 first.
///
/// Each square is its glyph followed by a space, or two spaces when empty.
/// With coordinates enabled every line is prefixed by its rank number and a
/// line of file letters closes the board.
pub fn render(game: &Game, config: &PlayConfig) -> String {
    let mut out = String::new();
    for y in 0..BOARD_SIZE {
        if config.coordinates {
            out.push(char::from(b'1' + y as u8));
            out.push(' ');
        }
        for x in 0..BOARD_SIZE {
            match game.piece_at(Position::new(x, y)) {
                Some(piece) => {
                    out.push(match config.glyphs {
                        Glyphs::Unicode => piece.glyph(),
                        Glyphs::Ascii => piece.kind.letter(piece.color),
                    });
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push('\n');
    }
    if config.coordinates {
        out.push_str("  ");
        out.push_str(FILES);
        out.push('\n');
    }
    out
}
