//! Per-resident mission progress record.

use serde::{Deserialize, Serialize};

/// Progress of one resident on one mission.
///
/// `tasks` is index-aligned with the definition's task list. A set
/// `completed_by` means the reward was claimed and the record is frozen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionProgress {
    /// ID of the mission this record tracks
    pub mission_id: u64,

    /// Completion flag per task
    #[serde(default)]
    pub tasks: Vec<bool>,

    /// Who claimed the reward, if anyone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
}

impl MissionProgress {
    /// Fresh record: every task open, reward unclaimed.
    pub fn new(mission_id: u64, task_count: usize) -> Self {
        Self {
            mission_id,
            tasks: vec![false; task_count],
            completed_by: None,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.completed_by.is_some()
    }

    /// Number of tasks marked done.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|done| **done).count()
    }
}
