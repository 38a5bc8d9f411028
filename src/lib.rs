//! Tic-tac-toe server and terminal client.
//!
//! Game state lives in [`tictactoe_core`]; this crate puts transports
//! around it.
//!
//! # Architecture
//!
//! - **Service**: request façade mapping game failures to status codes
//! - **REST**: JSON-over-HTTP API (axum)
//! - **Server**: MCP tool server (rmcp)
//! - **Client**: HTTP client and interactive terminal session
//! - **Config**: TOML/env/CLI settings
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{GameService, rest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = rest::router(GameService::new());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod client;
mod config;
pub mod rest;
mod server;
mod service;
pub mod terminal;

// Crate-level exports - Client
pub use client::{ClientError, GameClient};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - MCP server
pub use server::{GameServer, to_mcp_error};

// Crate-level exports - Service
pub use service::{Code, GameService, GetGameRequest, MakeMoveRequest, Status};

// Crate-level exports - Game types
pub use tictactoe_core::{GameId, GameSnapshot, Mark, Move};
