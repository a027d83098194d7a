//! Receipt of a stored reward claim.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MissionProgress;

/// What the store recorded when a mission reward was claimed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimReceipt {
    /// The frozen progress record
    pub progress: MissionProgress,

    /// Points credited by this claim
    pub points_awarded: u32,

    /// Resident's points total after the credit
    pub total_points: u64,

    /// When the claim was stored (UTC)
    pub claimed_at: Timestamp,
}
