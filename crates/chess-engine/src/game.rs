//! Board state and the central move mutator.

use crate::error::check_bounds;
use crate::{MoveError, Piece};
use chess_core::{Color, PieceKind, Position, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Back rank layout from file a to file h.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 board plus the last move played.
///
/// The board exclusively owns its pieces; capturing a piece drops it. The
/// last move is the only history kept and is what en passant eligibility is
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Indexed `[y][x]`.
    board: [[Option<Piece>; SIZE]; SIZE],
    last_move: Option<(Position, Position)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting position.
    ///
    /// White occupies ranks 0 and 1, Black ranks 6 and 7, both back ranks in
    /// the order Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook.
    pub fn new() -> Self {
        let mut game = Self::empty();
        for color in Color::ALL {
            for (x, kind) in BACK_RANK.iter().enumerate() {
                let x = x as i32;
                game.put(Piece::new(*kind, color, Position::new(x, color.back_rank())));
                game.put(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Position::new(x, color.pawn_rank()),
                ));
            }
        }
        game
    }

    /// Creates a game with no pieces and no last move.
    pub fn empty() -> Self {
        Game {
            board: Default::default(),
            last_move: None,
        }
    }

    /// Returns the piece at `pos`, or `None` if the square is empty or off the board.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.board[pos.y as usize][pos.x as usize].as_ref()
    }

    /// Returns true if no piece occupies `pos`.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Returns true if `pos` holds a piece whose color differs from `color`.
    #[inline]
    pub fn is_enemy(&self, pos: Position, color: Color) -> bool {
        self.piece_at(pos).is_some_and(|p| p.color != color)
    }

    /// Iterates over the placed pieces, rank 0 first and file 0 first within a rank.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.iter().flatten().flatten()
    }

    /// Returns the last move played as `(source, destination)`.
    #[inline]
    pub fn last_move(&self) -> Option<(Position, Position)> {
        self.last_move
    }

    /// Puts a piece on the square named by its own position, returning the
    /// piece it replaced. Used to build positions directly.
    pub fn place(&mut self, piece: Piece) -> Result<Option<Piece>, MoveError> {
        if !piece.position.is_on_board() {
            return Err(MoveError::OutOfBounds(piece.position));
        }
        Ok(self.put(piece))
    }

    /// Takes the piece at `pos` off the board.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.take(pos)
    }

    /// Returns the pseudo-legal destinations of the piece at `pos`, or an
    /// empty list if the square is empty.
    pub fn possible_moves(&self, pos: Position) -> Vec<Position> {
        self.piece_at(pos)
            .map(|piece| piece.possible_moves(self))
            .unwrap_or_default()
    }

    /// Moves the piece at `src` to `dst`.
    ///
    /// The destination must be one of the piece's pseudo-legal moves. Any
    /// piece standing on `dst` is captured, and a pawn moving diagonally
    /// onto the square skipped by an enemy pawn's double step captures that
    /// pawn en passant. Turn order and king safety are the caller's concern.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`], [`MoveError::EmptySource`] or
    /// [`MoveError::IllegalDestination`]; the game is unchanged on error.
    pub fn move_piece(&mut self, src: Position, dst: Position) -> Result<(), MoveError> {
        check_bounds(src, dst)?;
        let piece = self.piece_at(src).ok_or(MoveError::EmptySource(src))?;
        if !piece.possible_moves(self).contains(&dst) {
            return Err(MoveError::IllegalDestination { from: src, to: dst });
        }

        let kind = piece.kind;
        let victim = if piece.is_pawn() {
            self.en_passant_victim(src, dst)
        } else {
            None
        };

        let captured = self.relocate(src, dst);
        if let Some(victim) = victim {
            self.take(victim);
            tracing::debug!(from = %src, to = %dst, captured = %victim, "en passant");
        }
        self.last_move = Some((src, dst));

        tracing::debug!(
            piece = %kind,
            from = %src,
            to = %dst,
            capture = captured.is_some(),
            "moved piece"
        );
        Ok(())
    }

    /// Moves the piece at `src` onto `dst` without validation, marking it as
    /// moved and returning whatever stood on `dst`. Both squares must be on
    /// the board.
    pub(crate) fn relocate(&mut self, src: Position, dst: Position) -> Option<Piece> {
        let mut piece = self.take(src)?;
        piece.position = dst;
        piece.has_moved = true;
        self.put(piece)
    }

    pub(crate) fn set_last_move(&mut self, src: Position, dst: Position) {
        self.last_move = Some((src, dst));
    }

    /// Stores a piece at its own position. The position must be on the board.
    pub(crate) fn put(&mut self, piece: Piece) -> Option<Piece> {
        let Position { x, y } = piece.position;
        self.board[y as usize][x as usize].replace(piece)
    }

    /// Empties a square. The position must be on the board.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        self.board[pos.y as usize][pos.x as usize].take()
    }
}
