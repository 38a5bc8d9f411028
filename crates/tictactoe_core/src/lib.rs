//! Tic-tac-toe game engine.
//!
//! Holds the authoritative state of every game, validates moves,
//! alternates turns and detects wins and draws.
//!
//! # Architecture
//!
//! - **Types**: marks, moves and the board derived from a move list
//! - **Rules**: pure win and draw detection
//! - **Game**: the per-game state machine
//! - **Store**: the registry of games and its locking discipline
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStore, Mark, Move};
//!
//! let store = GameStore::new();
//! let game = store.create_game();
//! let game = store.make_move(game.id, Move::new(Mark::Cross, 5)).unwrap();
//! assert_eq!(game.turn, Mark::Nought);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
mod store;
mod types;

pub use error::{ErrorKind, GameError};
pub use game::{Game, GameSnapshot, GameStatus};
pub use store::GameStore;
pub use types::{Board, Cell, FIRST_CELL, GameId, LAST_CELL, Mark, Move, Square};
