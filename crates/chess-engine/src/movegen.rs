//! Pseudo-legal move generation.
//!
//! Destinations respect board edges and occupancy only. Whether a move
//! leaves the mover's own king attacked is not considered here.
//!
//! Output order is fixed: stepping pieces follow their offset tables,
//! sliding pieces walk their rays one after another in table order, and
//! pawns list forward pushes before the -x and then +x diagonals.

use crate::{Game, Piece};
use chess_core::{PieceKind, Position};

/// Knight offsets as `(dx, dy)`, counter-clockwise starting right of +x.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// King offsets as `(dx, dy)`, counter-clockwise starting at +x.
pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Rook rays: +x, -x, +y, -y.
pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop rays.
pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

impl Piece {
    /// Returns the pseudo-legal destinations of this piece on `game`.
    ///
    /// The piece does not have to be placed on `game`; its own square is
    /// never a destination and is not treated as occupied by it.
    pub fn possible_moves(&self, game: &Game) -> Vec<Position> {
        let mut moves = Vec::new();
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(game, &mut moves),
            PieceKind::Knight => self.step(game, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => self.slide(game, &BISHOP_DIRECTIONS, &mut moves),
            PieceKind::Rook => self.slide(game, &ROOK_DIRECTIONS, &mut moves),
            PieceKind::Queen => {
                self.slide(game, &BISHOP_DIRECTIONS, &mut moves);
                self.slide(game, &ROOK_DIRECTIONS, &mut moves);
            }
            PieceKind::King => self.step(game, &KING_OFFSETS, &mut moves),
        }
        moves
    }

    /// Returns true if this piece is a pawn that may capture en passant,
    /// that is the last move was an enemy pawn advancing two ranks to land
    /// on this pawn's rank one file away.
    pub fn can_be_en_passant(&self, game: &Game) -> bool {
        self.en_passant_square(game).is_some()
    }

    /// Returns the square this pawn would capture into en passant, if any.
    pub fn en_passant_square(&self, game: &Game) -> Option<Position> {
        if !self.is_pawn() {
            return None;
        }
        game.get_en_passant_moves()
            .into_iter()
            .find(|&(_, pawn)| {
                game.is_enemy(pawn, self.color)
                    && pawn.y == self.position.y
                    && (pawn.x - self.position.x).abs() == 1
            })
            .map(|(capture, _)| capture)
    }

    fn pawn_moves(&self, game: &Game, moves: &mut Vec<Position>) {
        let dir = self.color.pawn_direction();
        let from = self.position;

        let one = from.offset(0, dir);
        if one.is_on_board() && game.is_empty(one) {
            moves.push(one);

            let two = from.offset(0, 2 * dir);
            if from.y == self.color.pawn_rank()
                && !self.has_moved
                && two.is_on_board()
                && game.is_empty(two)
            {
                moves.push(two);
            }
        }

        let en_passant = self.en_passant_square(game);
        for dx in [-1, 1] {
            let target = from.offset(dx, dir);
            if !target.is_on_board() {
                continue;
            }
            if game.is_enemy(target, self.color)
                || (game.is_empty(target) && en_passant == Some(target))
            {
                moves.push(target);
            }
        }
    }

    fn step(&self, game: &Game, offsets: &[(i32, i32)], moves: &mut Vec<Position>) {
        for &(dx, dy) in offsets {
            let target = self.position.offset(dx, dy);
            if target.is_on_board() && (game.is_empty(target) || game.is_enemy(target, self.color))
            {
                moves.push(target);
            }
        }
    }

    fn slide(&self, game: &Game, directions: &[(i32, i32)], moves: &mut Vec<Position>) {
        for &(dx, dy) in directions {
            let mut target = self.position.offset(dx, dy);
            while target.is_on_board() {
                if game.is_empty(target) {
                    moves.push(target);
                } else {
                    if game.is_enemy(target, self.color) {
                        moves.push(target);
                    }
                    break;
                }
                target = target.offset(dx, dy);
            }
        }
    }
}
