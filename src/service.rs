//! Request-handling façade over the game store.
//!
//! Transports call [`GameService`] and receive either a snapshot or a
//! [`Status`]. The status code is the only place where domain failures
//! are translated for the outside world.

use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tictactoe_core::{ErrorKind, GameError, GameId, GameSnapshot, GameStore, Move};
use tracing::{debug, info, instrument, warn};

/// Request for fetching a game.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetGameRequest {
    /// Game ID.
    pub game_id: GameId,
}

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MakeMoveRequest {
    /// Game ID.
    pub game_id: GameId,
    /// Mark and cell (1-9, row-major) to play, as sibling fields
    /// `mark` and `cell`.
    #[serde(flatten)]
    pub mv: Move,
}

/// Stable status codes reported to remote callers.
///
/// Numeric values follow the gRPC status code table so that clients of
/// any transport can branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    /// Failure that did not come from the game engine.
    #[display("UNKNOWN")]
    Unknown,
    /// Cell outside 1-9.
    #[display("INVALID_ARGUMENT")]
    InvalidArgument,
    /// No game with the requested ID.
    #[display("NOT_FOUND")]
    NotFound,
    /// Game finished, cell occupied, or not the caller's turn.
    #[display("FAILED_PRECONDITION")]
    FailedPrecondition,
}

impl Code {
    /// Numeric value of the code.
    pub fn value(self) -> i32 {
        match self {
            Code::Unknown => 2,
            Code::InvalidArgument => 3,
            Code::NotFound => 5,
            Code::FailedPrecondition => 9,
        }
    }
}

impl From<ErrorKind> for Code {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => Code::NotFound,
            ErrorKind::InvalidArgument => Code::InvalidArgument,
            ErrorKind::FailedPrecondition => Code::FailedPrecondition,
        }
    }
}

/// A rejected request: code plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, Error)]
#[display("{}: {}", code, message)]
pub struct Status {
    /// Machine-readable code.
    pub code: Code,
    /// Description of the failure.
    pub message: String,
}

impl Status {
    /// Creates a new status.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<GameError> for Status {
    fn from(err: GameError) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

/// Entry point for every transport.
#[derive(Debug, Clone, Default)]
pub struct GameService {
    store: GameStore,
}

impl GameService {
    /// Creates a service over a fresh store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game service");
        Self::with_store(GameStore::new())
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: GameStore) -> Self {
        Self { store }
    }

    /// Creates a new game.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameSnapshot {
        let game = self.store.create_game();
        info!(game_id = game.id, "CreateGame");
        game
    }

    /// Returns the current state of a game.
    #[instrument(skip(self), fields(game_id = req.game_id))]
    pub fn get_game(&self, req: GetGameRequest) -> Result<GameSnapshot, Status> {
        debug!("GetGame");
        self.store.get_game(req.game_id).map_err(|e| {
            debug!(error = %e, "GetGame rejected");
            Status::from(e)
        })
    }

    /// Plays a move.
    #[instrument(
        skip(self),
        fields(game_id = req.game_id, mark = %req.mv.mark, cell = req.mv.cell)
    )]
    pub fn make_move(&self, req: MakeMoveRequest) -> Result<GameSnapshot, Status> {
        let game = self.store.make_move(req.game_id, req.mv).map_err(|e| {
            let status = Status::from(e);
            warn!(code = %status.code, message = %status.message, "MakeMove rejected");
            status
        })?;
        info!(
            is_finished = game.is_finished,
            winner = ?game.winner,
            "MakeMove"
        );
        Ok(game)
    }

    /// Number of games held by the store.
    pub fn game_count(&self) -> usize {
        self.store.len()
    }
}
