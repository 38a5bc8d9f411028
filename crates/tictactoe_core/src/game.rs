//! Game aggregate and its state machine.

use crate::error::GameError;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Cell, GameId, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a winner.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single tic-tac-toe game.
///
/// Only [`Game::make_move`] mutates a game, and it validates before
/// touching any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    moves: Vec<Move>,
    turn: Mark,
    status: GameStatus,
}

impl Game {
    /// Creates an empty game with cross to move.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            moves: Vec::new(),
            turn: Mark::Cross,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the game identifier.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns moves in the order they were played.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the mark expected to move next.
    ///
    /// Meaningless once the game is finished.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns the board built from the move history.
    pub fn board(&self) -> Board {
        Board::from_moves(&self.moves)
    }

    /// Returns true if a move already took `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.moves.iter().any(|m| m.cell == cell)
    }

    /// Validates and applies a move.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// finished game, cell range, occupied cell, wrong turn.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if !mv.in_range() {
            return Err(GameError::InvalidCell(mv.cell));
        }
        if self.is_occupied(mv.cell) {
            return Err(GameError::CellOccupied(mv.cell));
        }
        if mv.mark != self.turn {
            return Err(GameError::NotYourTurn {
                attempted: mv.mark,
                expected: self.turn,
            });
        }

        self.moves.push(mv);
        self.update_status();
        debug!(status = ?self.status, moves = self.moves.len(), "Move applied");
        Ok(())
    }

    /// Recomputes the outcome after a move and flips the turn if play continues.
    fn update_status(&mut self) {
        let board = self.board();
        if let Some(winner) = check_winner(&board) {
            self.status = GameStatus::Won(winner);
        } else if is_full(&board) {
            self.status = GameStatus::Drawn;
        } else {
            self.turn = self.turn.opponent();
        }
    }

    /// Copies the observable state out of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            is_finished: self.is_finished(),
            turn: self.turn,
            winner: self.winner(),
            moves: self.moves.clone(),
        }
    }
}

/// Immutable copy of a game's observable state.
///
/// This is also the wire representation returned by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game identifier.
    pub id: GameId,
    /// True once the game is won or drawn.
    pub is_finished: bool,
    /// Mark to move; only meaningful while the game is not finished.
    pub turn: Mark,
    /// Winning mark; absent on a draw or while in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Mark>,
    /// Moves in play order.
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl GameSnapshot {
    /// Returns true if a move already took `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.moves.iter().any(|m| m.cell == cell)
    }

    /// Returns true if the game is still running and `mark` is to move.
    pub fn is_turn_of(&self, mark: Mark) -> bool {
        !self.is_finished && self.turn == mark
    }

    /// Returns the board built from the move history.
    pub fn board(&self) -> Board {
        Board::from_moves(&self.moves)
    }
}
