//! Common `{data, error, errorText, additionalErrors}` wrapper returned by most
//! Wildberries communications endpoints.

use serde::{Deserialize, Serialize};

use crate::core::nullable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Payload; not to be trusted when `error` is true.
    #[serde(deserialize_with = "nullable::required", bound(deserialize = "T: Deserialize<'de>"))]
    pub data: Option<T>,
    pub error: bool,
    pub error_text: String,
    #[serde(deserialize_with = "nullable::required")]
    pub additional_errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Payload only when the remote reported success.
    pub fn into_data(self) -> Option<T> {
        if self.error {
            None
        } else {
            self.data
        }
    }
}

/// Reply payloads that can flag a remote business error on their own.
pub trait RemoteOutcome {
    fn is_remote_error(&self) -> bool;
}

impl<T> RemoteOutcome for ResponseEnvelope<T> {
    fn is_remote_error(&self) -> bool {
        self.error
    }
}
