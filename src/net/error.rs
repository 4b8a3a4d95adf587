//! Request failure taxonomy shared by the API client and submit flows.
//!
//! ERROR HANDLING
//! ==============
//! Every variant renders a user-facing message; pages surface it as an error
//! toast and keep the UI interactive.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorResponse;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Prefers the backend's `error.message`; falls back to a generic message
    /// carrying the status code when the body is empty or not the expected shape.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|resp| resp.error.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_failed_message(status));
        Self::Status { status, message }
    }

    /// True when the backend rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
