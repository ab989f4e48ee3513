use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single character request.
///
/// Every variant ends up in the same `ERROR` action; the variants only make
/// the message shown to the user more precise.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    /// The request never completed (DNS, connect, reset, TLS...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The body was not the JSON we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The body was valid JSON but lacked the envelope field.
    #[error("response is missing the '{field}' field")]
    MissingField { field: String },

    /// The request could not be started: no async runtime to run it on.
    #[error("no async runtime available to run the request")]
    NoRuntime,
}

impl FetchError {
    pub fn missing_field(field: &str) -> Self {
        FetchError::MissingField {
            field: field.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
