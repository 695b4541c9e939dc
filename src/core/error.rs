use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

/// Problem document returned by the remote API alongside 401 and 429.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProblem {
    pub title: String,
    pub detail: String,
    pub code: String,
    pub request_id: String,
    pub origin: String,
    pub status: u16,
    pub status_text: String,
    pub timestamp: String,
}

/// Error model shared by every endpoint adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No token for the scope the operation needs; the message names the
    /// environment variable and the CLI flag.
    #[error("{0}")]
    MissingCredentials(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized: {}", .0.detail)]
    Unauthorized(RemoteProblem),

    #[error("rate limited: {}", .0.detail)]
    RateLimited(RemoteProblem),

    #[error("upstream status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("response failed schema validation: {0}")]
    SchemaValidation(#[source] serde_json::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "invalidInput",
            ApiError::MissingCredentials(_) => "missingCredentials",
            ApiError::Transport(_) => "transport",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::RateLimited(_) => "rateLimited",
            ApiError::UpstreamStatus { .. } => "upstreamStatus",
            ApiError::SchemaValidation(_) => "schemaValidation",
        }
    }

    /// Structured body handed back to the calling agent.
    pub fn to_json(&self) -> JsonValue {
        match self {
            ApiError::Unauthorized(problem) | ApiError::RateLimited(problem) => json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "problem": problem,
            }),
            ApiError::UpstreamStatus { status, body } => json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "status": status,
                "body": body,
            }),
            _ => json!({ "kind": self.kind(), "message": self.to_string() }),
        }
    }
}
