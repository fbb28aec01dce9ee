//! Error type shared by every remote call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// A failed remote action, rendered to the user as a single message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status error from a response, falling back to a generic message when
    /// the server sent an empty body.
    pub(crate) fn status(status: u16, body: String) -> ApiError {
        let message = if body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            body
        };
        ApiError::Status { status, message }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }
}
