//! MCP server implementation for Cidade
//!
//! Exposes resident missions, rewards and the point-of-interest directory
//! as Model Context Protocol tools.

use anyhow::Result;
use cidade_core::{params as core, Tracker};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

use handlers::{McpHandlers, McpResult};

/// MCP server for Cidade
#[derive(Clone)]
pub struct CidadeMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CidadeMcpServer {
    /// Create a new Cidade MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "daily_missions",
        description = "List today's daily missions for a resident of a development: at most three, drawn at random from the daily missions available there, each with the resident's task progress. Pass a seed to repeat a draw."
    )]
    async fn daily_missions(&self, Parameters(params): Parameters<core::DailyMissions>) -> McpResult {
        self.handlers().list_missions(params.into()).await
    }

    #[tool(
        name = "evolution_missions",
        description = "List every evolution mission of a development with the resident's task progress. Empty when the development has none."
    )]
    async fn evolution_missions(
        &self,
        Parameters(params): Parameters<core::EvolutionMissions>,
    ) -> McpResult {
        self.handlers().list_missions(params.into()).await
    }

    #[tool(
        name = "all_missions",
        description = "List every mission in the catalog, general missions first, with the resident's task progress."
    )]
    async fn all_missions(&self, Parameters(params): Parameters<core::UserRef>) -> McpResult {
        self.handlers().all_missions(params).await
    }

    #[tool(
        name = "show_mission",
        description = "Show one mission with the resident's progress: completion percentage, which tasks are done (with their 0-based index), and who claimed the reward if it was claimed."
    )]
    async fn show_mission(&self, Parameters(params): Parameters<core::MissionRef>) -> McpResult {
        self.handlers().show_mission(params).await
    }

    #[tool(
        name = "toggle_task",
        description = "Flip one task of a mission between done and not done for a resident. task_index is 0-based. Once the reward is claimed the mission is frozen and toggles change nothing."
    )]
    async fn toggle_task(&self, Parameters(params): Parameters<core::ToggleTask>) -> McpResult {
        self.handlers().toggle_task(params).await
    }

    #[tool(
        name = "claim_reward",
        description = "Collect the points of a mission whose tasks are all done. Fails when tasks remain or when the reward was already collected; a mission can be claimed only once. claimant defaults to the user_id."
    )]
    async fn claim_reward(&self, Parameters(params): Parameters<core::ClaimReward>) -> McpResult {
        self.handlers().claim_reward(params).await
    }

    #[tool(
        name = "user_points",
        description = "Show the total points a resident has collected from claimed missions."
    )]
    async fn user_points(&self, Parameters(params): Parameters<core::UserRef>) -> McpResult {
        self.handlers().user_points(params).await
    }

    #[tool(
        name = "list_pois",
        description = "Search a development's points of interest. category must match exactly; omit it or pass \"all\" for every category. search matches any part of the name, ignoring case."
    )]
    async fn list_pois(&self, Parameters(params): Parameters<core::ListPois>) -> McpResult {
        self.handlers().list_pois(params).await
    }

    #[tool(
        name = "add_poi",
        description = "Register a point of interest in a development's directory. development_id, name and category are required; latitude and longitude are optional. An id is generated when not given."
    )]
    async fn add_poi(&self, Parameters(params): Parameters<core::CreatePoi>) -> McpResult {
        self.handlers().add_poi(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CidadeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cidade".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Cidade Inteligente tracks the missions residents of a residential development complete in the app, and the development's directory of points of interest.

## Core Concepts
- **Missions**: Daily missions (three drawn per day) and evolution missions (long-running), each a list of tasks worth a number of points
- **Progress**: Per resident and mission, one done flag per task
- **Claim**: Once every task is done the resident collects the points, exactly once; the mission is then frozen

## Workflow
1. `daily_missions` or `evolution_missions` to see what the resident can do
2. `toggle_task` as tasks get done
3. `claim_reward` when the mission reaches 100%
4. `user_points` for the balance

Use `list_pois` and `add_poi` for the points-of-interest directory."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CidadeMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cidade MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
