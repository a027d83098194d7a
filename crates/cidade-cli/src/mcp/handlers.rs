//! MCP tool handlers implementation

use cidade_core::{display::CreateResult, params as core, MissionKind, Tracker};
use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};

use super::errors::to_mcp_result;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Tracker,
}

impl McpHandlers {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub async fn list_missions(&self, params: core::ListMissions) -> McpResult {
        debug!("list_missions: {params:?}");

        match self.tracker.list_missions(&params).await {
            Ok(missions) => {
                let title = match params.kind {
                    MissionKind::Daily => "Daily missions",
                    MissionKind::Evolution => "Evolution missions",
                };
                text(format!(
                    "# {title} for {}\n\n{missions}",
                    params.development_id
                ))
            }
            Err(e) => to_mcp_result("Failed to list missions", e),
        }
    }

    pub async fn all_missions(&self, params: core::UserRef) -> McpResult {
        debug!("all_missions: {params:?}");

        match self.tracker.list_all_missions(&params).await {
            Ok(missions) => text(missions.to_string()),
            Err(e) => to_mcp_result("Failed to list missions", e),
        }
    }

    pub async fn show_mission(&self, params: core::MissionRef) -> McpResult {
        debug!("show_mission: {params:?}");

        match self.tracker.show_mission(&params).await {
            Ok(summary) => text(summary.to_string()),
            Err(e) => to_mcp_result("Failed to show mission", e),
        }
    }

    pub async fn toggle_task(&self, params: core::ToggleTask) -> McpResult {
        debug!("toggle_task: {params:?}");

        match self.tracker.toggle_task(&params).await {
            Ok(result) => text(result.to_string()),
            Err(e) => to_mcp_result("Failed to toggle task", e),
        }
    }

    pub async fn claim_reward(&self, params: core::ClaimReward) -> McpResult {
        debug!("claim_reward: {params:?}");

        match self.tracker.claim_reward(&params).await {
            Ok(result) => text(result.to_string()),
            Err(e) => to_mcp_result("Failed to claim reward", e),
        }
    }

    pub async fn user_points(&self, params: core::UserRef) -> McpResult {
        debug!("user_points: {params:?}");

        match self.tracker.user_points(&params).await {
            Ok(points) => text(format!("Points for {}: {points}", params.user_id)),
            Err(e) => to_mcp_result("Failed to read points", e),
        }
    }

    pub async fn add_poi(&self, params: core::CreatePoi) -> McpResult {
        debug!("add_poi: {params:?}");

        match self.tracker.add_poi(&params).await {
            Ok(poi) => text(CreateResult::new(poi).to_string()),
            Err(e) => to_mcp_result("Failed to add point of interest", e),
        }
    }

    pub async fn list_pois(&self, params: core::ListPois) -> McpResult {
        debug!("list_pois: {params:?}");

        match self.tracker.list_pois(&params).await {
            Ok(pois) => text(pois.to_string()),
            Err(e) => to_mcp_result("Failed to list points of interest", e),
        }
    }
}
