//! Turning adapter results into MCP tool replies.
//!
//! Every reply is a single text item holding pretty-printed JSON. Local input
//! violations become JSON-RPC `invalid_params`; everything else is a tool
//! result with `isError` set.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;

use crate::core::envelope::RemoteOutcome;
use crate::core::error::ApiError;

fn to_text<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

/// Reply with the validated payload; `isError` follows the remote's own flag.
pub fn outcome<T>(res: Result<T, ApiError>) -> Result<CallToolResult, McpError>
where
    T: Serialize + RemoteOutcome,
{
    match res {
        Ok(payload) => {
            let content = vec![Content::text(to_text(&payload)?)];
            if payload.is_remote_error() {
                Ok(CallToolResult::error(content))
            } else {
                Ok(CallToolResult::success(content))
            }
        }
        Err(e) => failure(e),
    }
}

/// Reply for operations answered with `204 No Content`.
pub fn acknowledged(res: Result<(), ApiError>, message: String) -> Result<CallToolResult, McpError> {
    match res {
        Ok(()) => Ok(CallToolResult::success(vec![Content::text(message)])),
        Err(e) => failure(e),
    }
}

pub fn failure(err: ApiError) -> Result<CallToolResult, McpError> {
    match err {
        ApiError::InvalidInput(msg) => Err(McpError::invalid_params(msg, None)),
        ApiError::MissingCredentials(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
        other => {
            tracing::debug!(kind = other.kind(), "tool call failed");
            Ok(CallToolResult::error(vec![Content::text(to_text(&other.to_json())?)]))
        }
    }
}
