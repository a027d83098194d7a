//! Kind and lifecycle enumerations for missions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of mission kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    /// Short missions rotated every day
    #[default]
    Daily,

    /// Long-running missions that track a resident's evolution
    Evolution,
}

impl MissionKind {
    /// Canonical lowercase representation, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionKind::Daily => "daily",
            MissionKind::Evolution => "evolution",
        }
    }
}

/// Lifecycle state of a mission for one resident.
///
/// `InProgress` and `Completable` both accept task toggles; `Claimed` is
/// terminal and accepts nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissionState {
    /// At least one task still open, reward not claimed
    InProgress,

    /// Every task done, reward waiting to be claimed
    Completable,

    /// Reward claimed; progress is frozen
    Claimed,
}

impl MissionState {
    /// Canonical lowercase representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionState::InProgress => "inprogress",
            MissionState::Completable => "completable",
            MissionState::Claimed => "claimed",
        }
    }

    /// Get state with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cidade_core::models::MissionState;
    ///
    /// assert_eq!(MissionState::Claimed.with_icon(), "✓ Claimed");
    /// assert_eq!(MissionState::Completable.with_icon(), "★ Ready to claim");
    /// assert_eq!(MissionState::InProgress.with_icon(), "○ In Progress");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            MissionState::Claimed => "✓ Claimed",
            MissionState::Completable => "★ Ready to claim",
            MissionState::InProgress => "○ In Progress",
        }
    }
}
