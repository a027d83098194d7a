//! Mission summary: a definition merged with one resident's progress.

use serde::{Deserialize, Serialize};

use super::{MissionDefinition, MissionProgress, MissionState};
use crate::engine;

/// Mission card data with computed progress figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissionSummary {
    /// The catalog entry
    pub mission: MissionDefinition,
    /// Normalized progress for the resident
    pub progress: MissionProgress,
    /// Completion percentage in [0, 100]
    pub percent: u8,
    /// Lifecycle state
    pub state: MissionState,
}

impl MissionSummary {
    /// Build a summary from a definition and an optional stored record.
    ///
    /// Missing or malformed records are normalized to a fresh one first.
    pub fn new(mission: MissionDefinition, progress: Option<&MissionProgress>) -> Self {
        let progress = engine::normalize(&mission, progress);
        let percent = engine::completion_percent(&mission, &progress);
        let state = engine::state(&mission, &progress);
        Self {
            mission,
            progress,
            percent,
            state,
        }
    }
}
