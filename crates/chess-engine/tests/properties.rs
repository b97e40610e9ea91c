//! Property tests over arbitrary coordinates and pieces.

use chess_core::{Color, PieceKind, Position};
use chess_engine::{Game, MoveError, Piece};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn on_board() -> impl Strategy<Value = Position> {
    (0i32..8, 0i32..8).prop_map(|(x, y)| Position::new(x, y))
}

fn off_board() -> impl Strategy<Value = Position> {
    prop_oneof![
        (-20i32..0, -20i32..20).prop_map(|(x, y)| Position::new(x, y)),
        (8i32..20, -20i32..20).prop_map(|(x, y)| Position::new(x, y)),
        (0i32..8, 8i32..20).prop_map(|(x, y)| Position::new(x, y)),
        (0i32..8, -20i32..0).prop_map(|(x, y)| Position::new(x, y)),
    ]
}

proptest! {
    #[test]
    fn possible_moves_are_idempotent(kind in any_kind(), color in any_color(), at in on_board()) {
        let game = Game::new();
        let piece = Piece::new(kind, color, at);
        prop_assert_eq!(piece.possible_moves(&game), piece.possible_moves(&game));
    }

    #[test]
    fn possible_moves_stay_on_board_and_off_friends(
        kind in any_kind(),
        color in any_color(),
        at in on_board(),
    ) {
        let game = Game::new();
        let piece = Piece::new(kind, color, at);
        for dst in piece.possible_moves(&game) {
            prop_assert!(dst.is_on_board());
            prop_assert!(dst != at);
            prop_assert!(game.is_empty(dst) || game.is_enemy(dst, color));
        }
    }

    #[test]
    fn out_of_bounds_source_leaves_game_unchanged(src in off_board(), dst in on_board()) {
        let mut game = Game::new();
        let before = game.clone();
        prop_assert_eq!(game.move_piece(src, dst), Err(MoveError::OutOfBounds(src)));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_destination_leaves_game_unchanged(src in on_board(), dst in off_board()) {
        let mut game = Game::new();
        let before = game.clone();
        prop_assert_eq!(game.move_piece(src, dst), Err(MoveError::OutOfBounds(dst)));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn trial_moves_always_roll_back(at in on_board(), dst in on_board()) {
        let mut game = Game::new();
        game.place(Piece::new(PieceKind::King, Color::Black, at)).unwrap();
        let before = game.clone();
        game.move_puts_king_in_check(at, dst);
        prop_assert_eq!(game, before);
    }
}
