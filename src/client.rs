//! HTTP client for the game API.

use crate::service::{Code, Status};
use derive_more::{Display, Error, From};
use tictactoe_core::{GameId, GameSnapshot, Move};
use tracing::{debug, info, instrument};

/// Error returned by [`GameClient`].
#[derive(Debug, Display, Error, From)]
pub enum ClientError {
    /// The server answered with a status.
    #[display("{}", _0)]
    Rejected(Status),
    /// The request did not complete.
    #[display("HTTP error: {}", _0)]
    Http(reqwest::Error),
}

impl ClientError {
    /// Status code if the server rejected the request.
    pub fn code(&self) -> Option<Code> {
        match self {
            ClientError::Rejected(status) => Some(status.code),
            ClientError::Http(_) => None,
        }
    }
}

/// Type-safe client for the game API.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new game.
    #[instrument(skip(self))]
    pub async fn create_game(&self) -> Result<GameSnapshot, ClientError> {
        info!("Creating game");
        let response = self
            .client
            .post(format!("{}/api/games", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetches the current state of a game.
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: GameId) -> Result<GameSnapshot, ClientError> {
        debug!("Getting game state");
        let response = self
            .client
            .get(format!("{}/api/games/{}", self.base_url, game_id))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Plays a move.
    #[instrument(skip(self))]
    pub async fn make_move(&self, game_id: GameId, mv: Move) -> Result<GameSnapshot, ClientError> {
        info!("Making move");
        let response = self
            .client
            .post(format!("{}/api/games/{}/moves", self.base_url, game_id))
            .json(&mv)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<GameSnapshot, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await?;
        debug!(%status, body = %body, "Request rejected");
        let rejected = serde_json::from_str::<Status>(&body)
            .unwrap_or_else(|_| Status::new(Code::Unknown, format!("{}: {}", status, body)));
        Err(ClientError::Rejected(rejected))
    }
}
