// src/client/error.rs
use reqwest::StatusCode;

/// Failure of a single probe. Every variant ends up as the detail of a failed check.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Request timeout")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Missing fields: {0:?}")]
    MissingFields(Vec<String>),

    #[error("Unexpected response: {0}")]
    UnexpectedPayload(String),
}

impl ProbeError {
    /// True for failures below HTTP: no response was ever received.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ProbeError::Timeout | ProbeError::Connection(_))
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout
        } else {
            ProbeError::Connection(err)
        }
    }
}
