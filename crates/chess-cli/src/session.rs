//! The interactive two-player loop.

use crate::config::PlayConfig;
use crate::render::render;
use chess_core::{parse_coordinate, Color, InputError, Position};
use chess_engine::{Game, MoveError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Reasons a typed move is rejected. The same side is asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the piece at {pos} belongs to {owner}, but it is {turn}'s turn")]
    WrongColor {
        pos: Position,
        owner: Color,
        turn: Color,
    },

    #[error("that move leaves the {0} king in check")]
    LeavesKingInCheck(Color),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side that moved last checkmated its opponent.
    Checkmate { winner: Color },
    /// The player typed `quit` or input ran out.
    Quit,
}

/// A game played over a pair of text streams.
pub struct Session<R, W> {
    game: Game,
    config: PlayConfig,
    turn: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session from the standard starting position with White to move.
    pub fn new(config: PlayConfig, input: R, output: W) -> Self {
        Session {
            game: Game::new(),
            config,
            turn: Color::White,
            input,
            output,
        }
    }

    /// Runs turns until checkmate, `quit`, or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the underlying streams are returned; rejected
    /// moves are reported to the player and retried.
    pub fn run(&mut self) -> io::Result<Outcome> {
        loop {
            writeln!(self.output, "Turn: {}", self.turn)?;

            let Some(src) = self.prompt("   Enter the source position (x,y): ")? else {
                return Ok(Outcome::Quit);
            };
            let Some(dst) = self.prompt("   Enter the destination position (x,y): ")? else {
                return Ok(Outcome::Quit);
            };

            if let Err(err) = self.play(&src, &dst) {
                tracing::debug!(%src, %dst, error = %err, "rejected move");
                writeln!(self.output, "Error: {err}")?;
                continue;
            }

            write!(self.output, "{}", render(&self.game, &self.config))?;

            let opponent = self.turn.opposite();
            if self.game.is_king_in_check(opponent) {
                writeln!(self.output, "Check!")?;
            }
            if self.game.is_checkmate_for(opponent) {
                writeln!(self.output, "Checkmate!")?;
                tracing::info!(winner = %self.turn, "checkmate");
                return Ok(Outcome::Checkmate { winner: self.turn });
            }

            self.turn = opponent;
        }
    }

    /// Writes `label` and reads one trimmed line. Returns `None` on `quit` or
    /// end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    /// Parses and applies one move for the side on turn.
    ///
    /// A move that leaves the mover's own king attacked is undone and
    /// rejected, so a side in check has to answer it.
    fn play(&mut self, src: &str, dst: &str) -> Result<(), PlayError> {
        let src = parse_coordinate(src)?;
        let dst = parse_coordinate(dst)?;

        let (mover, is_castle) = match self.game.piece_at(src) {
            Some(piece) => {
                if self.config.enforce_turns && piece.color != self.turn {
                    return Err(PlayError::WrongColor {
                        pos: src,
                        owner: piece.color,
                        turn: self.turn,
                    });
                }
                let is_castle = piece.is_king() && src.y == dst.y && (dst.x - src.x).abs() == 2;
                (piece.color, is_castle)
            }
            None => (self.turn, false),
        };

        let before = self.game.clone();
        if is_castle {
            self.game.castle(src, dst)?;
        } else {
            self.game.move_piece(src, dst)?;
        }
        if self.game.is_king_in_check(mover) {
            self.game = before;
            return Err(PlayError::LeavesKingInCheck(mover));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Glyphs;
    use chess_core::PieceKind;

    fn ascii() -> PlayConfig {
        PlayConfig {
            glyphs: Glyphs::Ascii,
            ..PlayConfig::default()
        }
    }

    fn play(script: &str, config: PlayConfig) -> (Outcome, Game, String) {
        let mut output = Vec::new();
        let mut session = Session::new(config, script.as_bytes(), &mut output);
        let outcome = session.run().unwrap();
        let game = session.game.clone();
        drop(session);
        (outcome, game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn quit_ends_session() {
        let (outcome, game, output) = play("quit\n", ascii());
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(game, Game::new());
        assert_eq!(
            output,
            "Turn: White\n   Enter the source position (x,y): "
        );
    }

    #[test]
    fn end_of_input_ends_session() {
        let (outcome, _, _) = play("e,2\n", ascii());
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn move_prints_board_and_passes_turn() {
        let (_, game, output) = play("e,2\ne,4\nquit\n", ascii());
        assert!(game.piece_at(Position::new(4, 3)).unwrap().is_pawn());
        assert!(output.contains("P P P P   P P P \n"));
        assert!(output.contains("        P       \n"));
        assert!(output.ends_with("Turn: Black\n   Enter the source position (x,y): "));
    }

    #[test]
    fn wrong_color_is_rejected() {
        let (_, game, output) = play("e,7\ne,5\nquit\n", ascii());
        assert_eq!(game, Game::new());
        assert!(output.contains("Error: the piece at e7 belongs to Black, but it is White's turn"));
        assert_eq!(output.matches("Turn: White").count(), 2);
    }

    #[test]
    fn turns_can_be_left_unenforced() {
        let config = PlayConfig {
            enforce_turns: false,
            ..ascii()
        };
        let (_, game, output) = play("e,7\ne,5\nquit\n", config);
        assert!(game.piece_at(Position::new(4, 4)).unwrap().is_pawn());
        assert!(!output.contains("Error"));
    }

    #[test]
    fn malformed_input_is_reported() {
        let (_, game, output) = play("e2\ne,4\nz,2\ne,4\ne,2\ne,5\nquit\n", ascii());
        assert_eq!(game, Game::new());
        let errors: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split("Error: ").nth(1))
            .collect();
        assert_eq!(
            errors,
            vec![
                "invalid coordinate 'e2': expected <file>,<rank> such as e,2",
                "position (25, 1) is outside the board",
                "illegal move from e2 to e5",
            ]
        );
    }

    #[test]
    fn fools_mate() {
        let script = "f,2\nf,3\ne,7\ne,5\ng,2\ng,4\nd,8\nh,4\n";
        let (outcome, _, output) = play(script, ascii());
        assert_eq!(
            outcome,
            Outcome::Checkmate {
                winner: Color::Black
            }
        );
        assert!(output.ends_with("Check!\nCheckmate!\n"));
    }

    #[test]
    fn move_ignoring_check_is_undone() {
        let opening = "e,2\ne,3\ne,7\ne,6\nf,2\nf,3\nd,8\nh,4\n";
        let (_, checked, _) = play(&format!("{opening}quit\n"), ascii());
        assert!(checked.is_king_in_check(Color::White));

        let script = format!("{opening}a,2\na,3\nh,4\ne,1\nquit\n");
        let (outcome, game, output) = play(&script, ascii());
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(game, checked);
        assert_eq!(game.king_position(Color::White), Some(Position::new(4, 0)));
        assert!(output.contains("Error: that move leaves the White king in check"));
        assert!(output.ends_with("Turn: White\n   Enter the source position (x,y): "));
        assert!(output.contains("Error: the piece at h4 belongs to Black, but it is White's turn"));
    }

    #[test]
    fn blocking_check_is_accepted() {
        let script = "e,2\ne,3\ne,7\ne,6\nf,2\nf,3\nd,8\nh,4\ng,2\ng,3\nquit\n";
        let (_, game, output) = play(script, ascii());
        assert!(!output.contains("Error"));
        assert!(game.piece_at(Position::new(6, 2)).unwrap().is_pawn());
        assert!(!game.is_king_in_check(Color::White));
        assert!(output.ends_with("Turn: Black\n   Enter the source position (x,y): "));
    }

    #[test]
    fn king_two_files_castles() {
        let script = "e,2\ne,4\ne,7\ne,5\ng,1\nf,3\nb,8\nc,6\nf,1\nc,4\ng,8\nf,6\ne,1\ng,1\nquit\n";
        let (_, game, output) = play(script, ascii());
        assert!(!output.contains("Error"));
        assert!(game.piece_at(Position::new(6, 0)).unwrap().is_king());
        assert_eq!(
            game.piece_at(Position::new(5, 0)).unwrap().kind,
            PieceKind::Rook
        );
    }
}
