//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::CoreError;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&CoreError> for OperationStatus {
    /// Resident-facing wording for a failed operation.
    fn from(error: &CoreError) -> Self {
        let message = match error {
            CoreError::NotCompletable {
                mission_id,
                remaining,
            } => format!(
                "Mission {mission_id} is not complete yet. Finish the remaining {remaining} task(s) to collect the reward."
            ),
            CoreError::AlreadyClaimed {
                mission_id,
                claimed_by,
            } => format!("The reward for mission {mission_id} was already collected by {claimed_by}."),
            other => other.to_string(),
        };
        Self::failure(message)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
