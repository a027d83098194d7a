//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and the MCP server can share
//! it unchanged.

use std::fmt;

use crate::models::{MissionKind, MissionState, MissionSummary, PointOfInterest};

impl fmt::Display for MissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MissionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mission = &self.mission;

        writeln!(
            f,
            "## {}. {} ({})",
            mission.id,
            mission.title,
            self.state.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Kind: {}", mission.kind)?;
        writeln!(f, "- Points: {}", mission.points)?;
        writeln!(
            f,
            "- Progress: {}% ({}/{})",
            self.percent,
            self.progress.completed_count(),
            mission.task_count()
        )?;
        if let Some(claimed_by) = &self.progress.completed_by {
            writeln!(f, "- Claimed by: {claimed_by}")?;
        }
        if let Some(ids) = &mission.development_ids {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            writeln!(f, "- Developments: {}", ids.join(", "))?;
        }

        if !mission.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", mission.description)?;
        }

        if !mission.tasks.is_empty() {
            writeln!(f)?;
            for (index, (task, done)) in mission.tasks.iter().zip(&self.progress.tasks).enumerate()
            {
                let mark = if *done { "x" } else { " " };
                writeln!(f, "- [{mark}] {index}. {task}")?;
            }
        }

        writeln!(f)
    }
}

impl fmt::Display for PointOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Category**: {}", self.category)?;
        if let Some((latitude, longitude)) = self.coordinates() {
            writeln!(f, "- **Location**: {latitude:.6}, {longitude:.6}")?;
        }
        writeln!(f)
    }
}
