//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - two-player game server and terminal client
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Networked two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game server (REST API at /api, MCP at /mcp)
    Serve {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the MCP game server over stdio
    Mcp,

    /// Play a game in the terminal against another client
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game server URL
        #[arg(long)]
        server_url: Option<String>,

        /// Milliseconds between polls while waiting for the opponent
        #[arg(long)]
        poll_interval_ms: Option<u64>,
    },
}
