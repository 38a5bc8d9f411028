//! Tests for move validation, turn alternation and outcome detection.

use tictactoe_core::rules::check_winner;
use tictactoe_core::{Board, ErrorKind, GameError, GameStore, Mark, Move};

fn x(cell: i32) -> Move {
    Move::new(Mark::Cross, cell)
}

fn o(cell: i32) -> Move {
    Move::new(Mark::Nought, cell)
}

#[test]
fn test_turn_follows_move_parity() {
    let store = GameStore::new();
    let id = store.create_game().id;
    let sequence = [x(5), o(1), x(3), o(7), x(4), o(6), x(8), o(2)];
    for (played, mv) in sequence.into_iter().enumerate() {
        let game = store.make_move(id, mv).unwrap();
        let count = played + 1;
        assert_eq!(game.moves.len(), count);
        let expected = if count % 2 == 0 { Mark::Cross } else { Mark::Nought };
        assert_eq!(game.turn, expected);
        assert!(!game.is_finished);
    }
}

#[test]
fn test_occupied_cell_rejected_for_either_mark() {
    let store = GameStore::new();
    let id = store.create_game().id;
    store.make_move(id, x(5)).unwrap();

    for mark in [Mark::Cross, Mark::Nought] {
        let err = store.make_move(id, Move::new(mark, 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
    }
}

#[test]
fn test_out_of_range_cells_rejected() {
    let store = GameStore::new();
    let id = store.create_game().id;
    for cell in [0, 10, -1] {
        let err = store.make_move(id, x(cell)).unwrap_err();
        assert_eq!(err, GameError::InvalidCell(cell));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    assert!(store.get_game(id).unwrap().moves.is_empty());
}

#[test]
fn test_wrong_mark_leaves_moves_unchanged() {
    let store = GameStore::new();
    let id = store.create_game().id;
    store.make_move(id, x(1)).unwrap();
    let before = store.get_game(id).unwrap();

    let err = store.make_move(id, x(2)).unwrap_err();
    assert_eq!(
        err,
        GameError::NotYourTurn {
            attempted: Mark::Cross,
            expected: Mark::Nought
        }
    );
    assert_eq!(store.get_game(id).unwrap(), before);
}

#[test]
fn test_replaying_occupied_cell_scenario() {
    let store = GameStore::new();
    let id = store.create_game().id;
    for mv in [x(5), o(1), x(9), o(3)] {
        store.make_move(id, mv).unwrap();
    }
    let err = store.make_move(id, x(1)).unwrap_err();
    assert_eq!(err, GameError::CellOccupied(1));
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
}

#[test]
fn test_diagonal_win_scenario() {
    let store = GameStore::new();
    let id = store.create_game().id;
    let mut game = store.get_game(id).unwrap();
    for mv in [x(1), o(2), x(5), o(4), x(9)] {
        game = store.make_move(id, mv).unwrap();
    }
    assert!(game.is_finished);
    assert_eq!(game.winner, Some(Mark::Cross));

    let err = store.make_move(id, o(3)).unwrap_err();
    assert_eq!(err, GameError::GameFinished);
}

#[test]
fn test_full_board_draw_scenario() {
    let store = GameStore::new();
    let id = store.create_game().id;
    let moves = [x(1), o(2), x(3), o(5), x(4), o(7), x(8), o(6), x(9)];
    assert_eq!(check_winner(&Board::from_moves(&moves)), None);

    let mut game = store.get_game(id).unwrap();
    for mv in moves {
        assert!(!game.is_finished);
        game = store.make_move(id, mv).unwrap();
    }
    assert!(game.is_finished);
    assert_eq!(game.winner, None);
    assert_eq!(game.moves, moves.to_vec());
}

#[test]
fn test_finished_iff_line_or_full() {
    let store = GameStore::new();
    let id = store.create_game().id;
    let mut played = Vec::new();
    for mv in [x(7), o(1), x(5), o(9), x(3)] {
        let game = store.make_move(id, mv).unwrap();
        played.push(mv);
        let board = Board::from_moves(&played);
        let expected = check_winner(&board).is_some() || played.len() == 9;
        assert_eq!(game.is_finished, expected);
    }
    assert_eq!(store.get_game(id).unwrap().winner, Some(Mark::Cross));
}

#[test]
fn test_win_detection_ignores_move_order() {
    let moves = [x(3), o(1), x(5), o(2), x(7)];
    let expected = check_winner(&Board::from_moves(&moves));
    assert_eq!(expected, Some(Mark::Cross));

    let mut permuted = moves;
    permuted.rotate_left(2);
    assert_eq!(check_winner(&Board::from_moves(&permuted)), expected);
    permuted.reverse();
    assert_eq!(check_winner(&Board::from_moves(&permuted)), expected);
}

#[test]
fn test_unknown_game_not_found() {
    let store = GameStore::new();
    store.create_game();
    let err = store.get_game(42).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
