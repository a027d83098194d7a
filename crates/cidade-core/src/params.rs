//! Parameter structures for tracker operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific dependencies. Interface layers wrap or convert into
//! these types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP server is only compiled in with the
//! `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::MissionKind;

/// Parameters for operations scoped to a single resident.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserRef {
    /// Identifier of the resident
    pub user_id: String,
}

/// Parameters for listing a development's missions with a resident's
/// progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListMissions {
    /// Identifier of the resident
    pub user_id: String,
    /// Development the resident lives in
    pub development_id: String,
    /// Daily missions are sampled; evolution missions are all listed
    #[serde(default)]
    pub kind: MissionKind,
    /// Seed for the daily sample; a fresh random draw when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Parameters for drawing today's daily missions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DailyMissions {
    /// Identifier of the resident
    pub user_id: String,
    /// Development the resident lives in
    pub development_id: String,
    /// Seed for a reproducible draw; a fresh random draw when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl From<DailyMissions> for ListMissions {
    fn from(val: DailyMissions) -> Self {
        ListMissions {
            user_id: val.user_id,
            development_id: val.development_id,
            kind: MissionKind::Daily,
            seed: val.seed,
        }
    }
}

/// Parameters for listing a development's evolution missions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EvolutionMissions {
    /// Identifier of the resident
    pub user_id: String,
    /// Development the resident lives in
    pub development_id: String,
}

impl From<EvolutionMissions> for ListMissions {
    fn from(val: EvolutionMissions) -> Self {
        ListMissions {
            user_id: val.user_id,
            development_id: val.development_id,
            kind: MissionKind::Evolution,
            seed: None,
        }
    }
}

/// Parameters identifying one mission of one resident.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MissionRef {
    /// Identifier of the resident
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
}

/// Parameters for flipping one task of a mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleTask {
    /// Identifier of the resident
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
    /// 0-based index of the task in the mission's task list
    pub task_index: usize,
}

/// Parameters for claiming a completed mission's reward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ClaimReward {
    /// Identifier of the resident
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
    /// Name recorded as the claimant; defaults to the user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimant: Option<String>,
}

impl ClaimReward {
    /// The name recorded on the claim.
    pub fn claimant(&self) -> &str {
        self.claimant.as_deref().unwrap_or(&self.user_id)
    }
}

/// Parameters for registering a point of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePoi {
    /// Explicit identifier; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Development the entry belongs to
    pub development_id: String,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// Latitude in degrees, -90 to 90
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees, -180 to 180
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Parameters for searching a development's points of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPois {
    /// Development to search in
    pub development_id: String,
    /// Exact category, or "all" / absent for every category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring of the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
