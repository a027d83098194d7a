//! Mission definition model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::MissionKind;

/// Immutable, statically registered mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MissionDefinition {
    /// Identifier, unique across the whole catalog
    pub id: u64,

    /// Daily or evolution mission
    #[serde(default)]
    pub kind: MissionKind,

    /// Short title shown on the mission card
    pub title: String,

    /// Longer explanation of the mission
    #[serde(default)]
    pub description: String,

    /// Icon name used by the app
    #[serde(default)]
    pub icon: String,

    /// Points credited when the reward is claimed
    #[serde(default)]
    pub points: u32,

    /// Ordered task descriptions; the index is the progress index
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Developments this mission is restricted to; `None` means every
    /// development
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_ids: Option<BTreeSet<String>>,
}

impl MissionDefinition {
    /// Whether the mission is visible to residents of `development_id`.
    pub fn applies_to(&self, development_id: &str) -> bool {
        self.development_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(development_id))
    }

    /// Whether the mission applies to every development.
    pub fn is_general(&self) -> bool {
        self.development_ids.is_none()
    }

    /// Number of tasks in the mission.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
