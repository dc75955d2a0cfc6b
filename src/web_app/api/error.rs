// web_app/api/error.rs - Error taxonomy for remote API calls

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a body that could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, optionally carrying the server's `{message}`
    #[error("server returned HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose JSON did not match the expected structure
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Product listing was valid JSON but not an array
    #[error("unexpected response format")]
    UnexpectedShape,
}

impl ApiError {
    /// The human-readable message the server attached to an error response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server message if present, otherwise the caller's fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
