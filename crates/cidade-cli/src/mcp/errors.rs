//! Error handling utilities for MCP server

use cidade_core::{display::OperationStatus, CoreError};
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};

/// Maps a tracker failure onto the MCP response.
///
/// Claim conditions a resident can act on come back as a failed tool result
/// carrying the explanation; bad input becomes `invalid_params`; anything
/// else is an internal error.
pub fn to_mcp_result(message: &str, error: CoreError) -> Result<CallToolResult, ErrorData> {
    if error.is_recoverable() {
        Ok(CallToolResult::error(vec![Content::text(
            OperationStatus::from(&error).to_string(),
        )]))
    } else if error.is_invalid_input() {
        Err(ErrorData::invalid_params(format!("{message}: {error}"), None))
    } else {
        Err(ErrorData::internal_error(format!("{message}: {error}"), None))
    }
}
