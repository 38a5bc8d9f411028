//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark, Square};
use tracing::instrument;

/// The eight winning triples, cells numbered 1-9 row-major.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    // Columns
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    // Diagonals
    [1, 5, 9],
    [3, 5, 7],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark owns all three cells of a line,
/// `None` otherwise (game in progress or drawn).
///
/// A board where both marks own a line can only come from a corrupted
/// move history; the first line found in [`WINNING_LINES`] order wins.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (
                Some(Square::Occupied(m1)),
                Some(Square::Occupied(m2)),
                Some(Square::Occupied(m3)),
            ) if m1 == m2 && m2 == m3 => Some(m1),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn board(moves: &[(Mark, Cell)]) -> Board {
        let moves: Vec<Move> = moves.iter().map(|&(m, c)| Move::new(m, c)).collect();
        Board::from_moves(&moves)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let b = board(&line.map(|c| (Mark::Nought, c)));
            assert_eq!(check_winner(&b), Some(Mark::Nought), "line {line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let b = board(&[(Mark::Cross, 1), (Mark::Cross, 2), (Mark::Nought, 3)]);
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board(&[(Mark::Cross, 1), (Mark::Cross, 5)]);
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_order_independent() {
        let forward = [
            (Mark::Cross, 1),
            (Mark::Nought, 2),
            (Mark::Cross, 5),
            (Mark::Nought, 4),
            (Mark::Cross, 9),
        ];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(check_winner(&board(&forward)), Some(Mark::Cross));
        assert_eq!(check_winner(&board(&reversed)), Some(Mark::Cross));
    }
}
