//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

/// Checks if every square holds a mark.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::{Mark, Move};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_moves(&[Move::new(Mark::Cross, 5)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let moves = [
            Move::new(Mark::Cross, 1),
            Move::new(Mark::Nought, 2),
            Move::new(Mark::Cross, 3),
            Move::new(Mark::Nought, 5),
            Move::new(Mark::Cross, 4),
            Move::new(Mark::Nought, 7),
            Move::new(Mark::Cross, 8),
            Move::new(Mark::Nought, 6),
            Move::new(Mark::Cross, 9),
        ];
        let board = Board::from_moves(&moves);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
