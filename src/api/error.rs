//! Failure taxonomy for user fetches.

use thiserror::Error;

/// Errors produced while fetching the user directory.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Failed to reach {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of users.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source could not be consulted at all. `reason` may be absent.
    #[error("User source unavailable{}", reason_suffix(.reason))]
    Unavailable { reason: Option<String> },
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

/// Coarse classification, mirroring how callers react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Deserialization,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::Network,
            FetchError::Status { .. } => FetchErrorKind::Network,
            FetchError::Unavailable { .. } => FetchErrorKind::Network,
            FetchError::Decode { .. } => FetchErrorKind::Deserialization,
        }
    }

    /// Human-readable description, or `None` when the failure carries none.
    pub fn description(&self) -> Option<String> {
        match self {
            FetchError::Unavailable { reason } => reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(|r| r.to_string()),
            other => Some(other.to_string()),
        }
    }
}

/// Errors raised while building an [`ApiClient`](super::ApiClient).
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("Invalid users endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
