//! Turns every way an API call can fail into one user-facing sentence.
//!
//! The transport layer classifies a failure into an [`ApiFailure`]; the
//! message mapping below is the only place user-visible error text is
//! decided, so every view shows the same wording for the same failure.

use serde_json::Value;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// How a request failed, before it is reduced to a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// The server answered with a non-success status.
    Response { status: u16, body: Option<Value> },
    /// No response reached the client.
    Network,
    /// The HTTP client failed for another reason (encoding, decoding, ...).
    Transport(String),
    /// Anything that did not come from the HTTP layer.
    Unexpected(Option<String>),
}

impl ApiFailure {
    /// Builds a response failure from the raw body text. Bodies that are not
    /// JSON are kept as `None`.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Response {
            status,
            body: serde_json::from_str(body).ok(),
        }
    }

    /// The normalised message, in priority order: body `message`, 404, 500,
    /// network, transport message, generic fallback.
    pub fn message(&self) -> String {
        match self {
            Self::Response { status, body } => {
                if let Some(message) = body
                    .as_ref()
                    .and_then(|b| b.get("message"))
                    .and_then(Value::as_str)
                {
                    return message.to_string();
                }
                match status {
                    404 => NOT_FOUND_MESSAGE.to_string(),
                    500 => SERVER_ERROR_MESSAGE.to_string(),
                    other => format!("Request failed with status code {}", other),
                }
            }
            Self::Network => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Transport(message) if message.is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
            Self::Transport(message) => message.clone(),
            Self::Unexpected(Some(message)) if !message.is_empty() => message.clone(),
            Self::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Error returned by every API client call. Carries only the display string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<ApiFailure> for ApiError {
    fn from(failure: ApiFailure) -> Self {
        Self {
            message: failure.message(),
        }
    }
}
