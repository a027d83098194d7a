//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{ClaimReceipt, MissionSummary, PointOfInterest};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PointOfInterest> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Registered point of interest with ID: {}",
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes made.
///
/// # Examples
///
/// ```rust
/// use cidade_core::{display::UpdateResult, MissionCatalog, MissionSummary};
///
/// let mission = MissionCatalog::builtin().unwrap().mission(4).unwrap().clone();
/// let summary = MissionSummary::new(mission, None);
///
/// let result = UpdateResult::with_changes(summary, vec!["Task 0 marked done".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated mission 4"));
/// assert!(output.contains("- Task 0 marked done"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<MissionSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated mission {}", self.resource.mission.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a successful reward claim.
pub struct ClaimResult {
    pub summary: MissionSummary,
    pub receipt: ClaimReceipt,
}

impl ClaimResult {
    pub fn new(summary: MissionSummary, receipt: ClaimReceipt) -> Self {
        Self { summary, receipt }
    }
}

impl fmt::Display for ClaimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Claimed mission {}: +{} points",
            self.summary.mission.id, self.receipt.points_awarded
        )?;
        writeln!(f)?;
        writeln!(f, "- **Total points**: {}", self.receipt.total_points)?;
        writeln!(
            f,
            "- **Claimed at**: {}",
            LocalDateTime(&self.receipt.claimed_at)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}
