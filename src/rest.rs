//! JSON-over-HTTP API for games.
//!
//! | Method | Path                     | Success           |
//! |--------|--------------------------|-------------------|
//! | POST   | `/api/games`             | 201 + snapshot    |
//! | GET    | `/api/games/{id}`        | 200 + snapshot    |
//! | POST   | `/api/games/{id}/moves`  | 200 + snapshot    |
//! | GET    | `/health`                | 200 + status      |
//!
//! Failures carry a JSON [`Status`] body, including requests whose path
//! or body cannot be decoded (`INVALID_ARGUMENT`).

use crate::service::{Code, GameService, GetGameRequest, MakeMoveRequest, Status};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tictactoe_core::{GameId, GameSnapshot, Move};
use tracing::instrument;

/// Health status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of games created since startup.
    pub games: usize,
}

/// Builds the router for the game API.
pub fn router(service: GameService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(get_game))
        .route("/api/games/{id}/moves", post(make_move))
        .with_state(service)
}

/// HTTP status used for each code.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::FailedPrecondition => StatusCode::CONFLICT,
        Code::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        (http_status(self.code), Json(self)).into_response()
    }
}

impl From<JsonRejection> for Status {
    fn from(rejection: JsonRejection) -> Self {
        Status::new(Code::InvalidArgument, rejection.body_text())
    }
}

impl From<PathRejection> for Status {
    fn from(rejection: PathRejection) -> Self {
        Status::new(Code::InvalidArgument, rejection.body_text())
    }
}

async fn health(State(service): State<GameService>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        games: service.game_count(),
    })
}

#[instrument(skip(service))]
async fn create_game(State(service): State<GameService>) -> (StatusCode, Json<GameSnapshot>) {
    (StatusCode::CREATED, Json(service.create_game()))
}

#[instrument(skip(service))]
async fn get_game(
    State(service): State<GameService>,
    path: Result<Path<GameId>, PathRejection>,
) -> Result<Json<GameSnapshot>, Status> {
    let Path(game_id) = path?;
    service.get_game(GetGameRequest { game_id }).map(Json)
}

#[instrument(skip(service))]
async fn make_move(
    State(service): State<GameService>,
    path: Result<Path<GameId>, PathRejection>,
    body: Result<Json<Move>, JsonRejection>,
) -> Result<Json<GameSnapshot>, Status> {
    let Path(game_id) = path?;
    let Json(mv) = body?;
    service.make_move(MakeMoveRequest { game_id, mv }).map(Json)
}
