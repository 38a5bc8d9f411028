//! MCP server exposing games as tools.

use crate::service::{Code, GameService, GetGameRequest, MakeMoveRequest, Status};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tictactoe_core::GameSnapshot;
use tracing::{debug, info, instrument};

/// Main server handler.
#[derive(Clone)]
pub struct GameServer {
    service: GameService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GameServer {
    /// Creates a new game server over a shared service.
    #[instrument(skip(service))]
    pub fn with_service(service: GameService) -> Self {
        info!("Creating MCP game server with shared game service");
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a new game server with its own store.
    pub fn new() -> Self {
        Self::with_service(GameService::new())
    }

    /// Creates a new game.
    #[instrument(skip(self))]
    #[tool(
        description = "Create a new tic-tac-toe game. CROSS moves first. Returns the game as JSON."
    )]
    pub async fn create_game(&self) -> Result<CallToolResult, McpError> {
        let game = self.service.create_game();
        snapshot_result(&game)
    }

    /// Gets the current state of a game.
    #[instrument(skip(self, req), fields(game_id = req.game_id))]
    #[tool(description = "Get the current state of a game: turn, finished flag, winner and moves.")]
    pub async fn get_game(
        &self,
        Parameters(req): Parameters<GetGameRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Getting game state");
        let game = self.service.get_game(req).map_err(to_mcp_error)?;
        snapshot_result(&game)
    }

    /// Plays a move.
    #[instrument(skip(self, req), fields(game_id = req.game_id, cell = req.mv.cell))]
    #[tool(
        description = "Place a mark (CROSS or NOUGHT) in a cell \
                       (1-9, numbered left-to-right, top-to-bottom)."
    )]
    pub async fn make_move(
        &self,
        Parameters(req): Parameters<MakeMoveRequest>,
    ) -> Result<CallToolResult, McpError> {
        let game = self.service.make_move(req).map_err(to_mcp_error)?;
        snapshot_result(&game)
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for GameServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some("Two-player tic-tac-toe game server".into());
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}

fn snapshot_result(game: &GameSnapshot) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string(game)
        .map_err(|e| McpError::internal_error(format!("Failed to encode game: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Maps a rejected request onto an MCP error, keeping the code in `data`.
pub fn to_mcp_error(status: Status) -> McpError {
    let data = Some(serde_json::json!({
        "code": status.code,
        "value": status.code.value(),
    }));
    match status.code {
        Code::NotFound => McpError::resource_not_found(status.message, data),
        Code::InvalidArgument => McpError::invalid_params(status.message, data),
        Code::FailedPrecondition => McpError::invalid_request(status.message, data),
        Code::Unknown => McpError::internal_error(status.message, data),
    }
}
