//! Core domain types for tic-tac-toe.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a game within a [`GameStore`](crate::GameStore).
pub type GameId = u64;

/// Cell number as carried on the wire (legal range 1-9, row-major).
pub type Cell = i32;

/// Lowest legal cell number.
pub const FIRST_CELL: Cell = 1;

/// Highest legal cell number.
pub const LAST_CELL: Cell = 9;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mark {
    /// Cross (moves first).
    #[strum(serialize = "X")]
    Cross,
    /// Nought (moves second).
    #[strum(serialize = "O")]
    Nought,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Parses a player symbol (`X` or `O`, case-insensitive).
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Some(Mark::Cross),
            "O" => Some(Mark::Nought),
            _ => None,
        }
    }
}

/// A mark placed in a cell.
///
/// The cell is range-checked when the move is applied to a game,
/// so a `Move` may carry whatever number a client sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// Mark being placed.
    pub mark: Mark,
    /// Target cell (1-9, row-major).
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }

    /// Returns true if the cell lies on the board.
    pub fn in_range(&self) -> bool {
        (FIRST_CELL..=LAST_CELL).contains(&self.cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

/// 3x3 board derived from a move history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order, index 0 is cell 1.
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the board by placing every move in `moves`.
    ///
    /// Out-of-range cells are skipped; a later move on the same cell
    /// overwrites an earlier one.
    pub fn from_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Self {
        let mut board = Self::new();
        for mv in moves {
            if let Some(idx) = Self::index(mv.cell) {
                board.squares[idx] = Square::Occupied(mv.mark);
            }
        }
        board
    }

    fn index(cell: Cell) -> Option<usize> {
        if (FIRST_CELL..=LAST_CELL).contains(&cell) {
            usize::try_from(cell - FIRST_CELL).ok()
        } else {
            None
        }
    }

    /// Gets the square at the given cell (1-9).
    pub fn get(&self, cell: Cell) -> Option<Square> {
        Self::index(cell).map(|idx| self.squares[idx])
    }

    /// Returns all squares, index 0 is cell 1.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::Cross.opponent(), Mark::Nought);
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Mark::from_symbol("x"), Some(Mark::Cross));
        assert_eq!(Mark::from_symbol(" O "), Some(Mark::Nought));
        assert_eq!(Mark::from_symbol("z"), None);
        assert_eq!(Mark::Cross.to_string(), "X");
    }

    #[test]
    fn test_board_from_moves() {
        let moves = [Move::new(Mark::Cross, 1), Move::new(Mark::Nought, 9)];
        let board = Board::from_moves(&moves);
        assert_eq!(board.get(1), Some(Square::Occupied(Mark::Cross)));
        assert_eq!(board.get(9), Some(Square::Occupied(Mark::Nought)));
        assert_eq!(board.get(5), Some(Square::Empty));
        assert_eq!(board.get(0), None);
        assert_eq!(board.get(10), None);
    }

    #[test]
    fn test_out_of_range_moves_ignored() {
        let moves = [Move::new(Mark::Cross, 0), Move::new(Mark::Nought, 10)];
        assert_eq!(Board::from_moves(&moves), Board::new());
    }

    #[test]
    fn test_mark_wire_names() {
        let json = serde_json::to_string(&Move::new(Mark::Nought, 3)).unwrap();
        assert_eq!(json, r#"{"mark":"NOUGHT","cell":3}"#);
    }
}
