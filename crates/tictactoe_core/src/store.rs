//! Registry of games shared across request handlers.

use crate::error::GameError;
use crate::game::{Game, GameSnapshot};
use crate::types::{GameId, Move};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Default)]
struct Registry {
    games: HashMap<GameId, Game>,
    /// Last identifier handed out. Identifiers are never reused.
    last_id: GameId,
}

/// Owns every game and serializes access to them.
///
/// Cloning the store yields another handle to the same registry. All
/// operations hold one store-wide lock for their whole duration, so two
/// moves on the same game are applied strictly one after the other.
/// Callers only ever receive [`GameSnapshot`] copies.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    registry: Arc<Mutex<Registry>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    // Every mutation is validated before it is applied, so a panic while the
    // lock is held cannot leave a half-applied move behind.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a new game with cross to move.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameSnapshot {
        let mut registry = self.lock();
        registry.last_id += 1;
        let id = registry.last_id;
        let game = Game::new(id);
        let snapshot = game.snapshot();
        registry.games.insert(id, game);
        info!(game_id = id, games = registry.games.len(), "Created new game");
        snapshot
    }

    /// Returns the current state of a game.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: GameId) -> Result<GameSnapshot, GameError> {
        let registry = self.lock();
        match registry.games.get(&id) {
            Some(game) => Ok(game.snapshot()),
            None => {
                debug!(game_id = id, "Game not found");
                Err(GameError::NotFound(id))
            }
        }
    }

    /// Applies a move to a game and returns the resulting state.
    #[instrument(skip(self), fields(mark = %mv.mark, cell = mv.cell))]
    pub fn make_move(&self, id: GameId, mv: Move) -> Result<GameSnapshot, GameError> {
        let mut registry = self.lock();
        let game = registry.games.get_mut(&id).ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            GameError::NotFound(id)
        })?;

        game.make_move(mv).map_err(|e| {
            warn!(game_id = id, error = %e, "Move rejected");
            e
        })?;

        info!(
            game_id = id,
            status = ?game.status(),
            moves = game.moves().len(),
            "Move completed successfully"
        );
        Ok(game.snapshot())
    }

    /// Number of games created so far.
    pub fn len(&self) -> usize {
        self.lock().games.len()
    }

    /// Returns true if no game has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
