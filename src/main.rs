//! Tic-tac-toe - unified CLI
//!
//! Runs the game server (HTTP or stdio MCP) or the terminal client.

#![warn(missing_docs)]

use anyhow::Result;
use axum::body::Body;
use axum::http::Request;
use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager,
    tower::{StreamableHttpServerConfig, StreamableHttpService},
};
use std::path::PathBuf;
use std::sync::Arc;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{GameServer, GameService, Settings, rest, terminal};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_http_server(config, host, port).await,
        Command::Mcp => run_mcp_server().await,
        Command::Play {
            config,
            server_url,
            poll_interval_ms,
        } => run_client(config, server_url, poll_interval_ms).await,
    }
}

/// Run the HTTP game server (REST + MCP)
#[instrument(skip_all)]
async fn run_http_server(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,tictactoe_server=debug,tictactoe_core=debug")
            }),
        )
        .init();

    let settings = Settings::load(config.as_deref())?
        .with_host(host)
        .with_port(port);
    debug!(?settings, "Server settings");

    info!("Starting tic-tac-toe server on HTTP");

    // One service shared by every REST request and every MCP session
    let service = GameService::new();

    let mcp_service = StreamableHttpService::new(
        {
            let service = service.clone();
            move || {
                debug!("Creating new GameServer instance with shared games");
                Ok(GameServer::with_service(service.clone()))
            }
        },
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    let app = rest::router(service)
        .nest_service("/mcp", mcp_service)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }));

    let addr = (settings.host().as_str(), *settings.port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        address = %listener.local_addr()?,
        "Server ready - REST API at /api/games, MCP at /mcp"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the MCP game server (stdio mode)
async fn run_mcp_server() -> Result<()> {
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe MCP server");

    let server = GameServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;
    info!("Server ready - connect via MCP protocol");
    service.waiting().await?;

    Ok(())
}

/// Run the terminal client
async fn run_client(
    config: Option<PathBuf>,
    server_url: Option<String>,
    poll_interval_ms: Option<u64>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(config.as_deref())?
        .with_server_url(server_url)
        .with_poll_interval_ms(poll_interval_ms);

    terminal::run(&settings).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
