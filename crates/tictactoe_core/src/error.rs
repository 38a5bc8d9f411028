//! Failures of game operations.

use crate::types::{Cell, GameId, Mark};
use derive_more::{Display, Error};

/// Coarse classification of a [`GameError`].
///
/// Transports translate these kinds into their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// The referenced game does not exist.
    #[display("not found")]
    NotFound,
    /// The request is malformed regardless of game state.
    #[display("invalid argument")]
    InvalidArgument,
    /// The request is well formed but the game is not in a state to accept it.
    #[display("failed precondition")]
    FailedPrecondition,
}

/// Rejection of a store or game operation.
///
/// A rejected operation never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No game with this identifier.
    #[display("Game {} not found", _0)]
    NotFound(#[error(not(source))] GameId),

    /// Cell outside 1-9.
    #[display("Invalid cell number {}: must be in range [1,9]", _0)]
    InvalidCell(#[error(not(source))] Cell),

    /// The game has already been won or drawn.
    #[display("Game is already finished")]
    GameFinished,

    /// A previous move already took this cell.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// The move was submitted for the mark that is not to move.
    #[display("It's not {}'s turn ({} to move)", attempted, expected)]
    NotYourTurn {
        /// Mark the caller tried to place.
        attempted: Mark,
        /// Mark whose turn it is.
        expected: Mark,
    },
}

impl GameError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotFound(_) => ErrorKind::NotFound,
            GameError::InvalidCell(_) => ErrorKind::InvalidArgument,
            GameError::GameFinished
            | GameError::CellOccupied(_)
            | GameError::NotYourTurn { .. } => ErrorKind::FailedPrecondition,
        }
    }
}
