//! Client error types

use playdeck_core::envelope::{AuthErrorCode, ErrorBody};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// No usable credential; the forced-logout side effect has already fired
    #[error("Not authenticated")]
    Unauthenticated,

    /// Backend reported a token problem that refresh cannot fix
    #[error("Auth rejected by backend ({code}): {message}")]
    DomainAuth {
        code: AuthErrorCode,
        message: String,
    },

    /// Server rejected the credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create an error from an HTTP error response
    ///
    /// A recognized domain auth code in the body wins over the HTTP status;
    /// everything else maps by status so callers can show the server message.
    pub fn from_response(status: reqwest::StatusCode, body: &ErrorBody, raw: String) -> Self {
        if let Some(code) = body.auth_code() {
            return Self::DomainAuth {
                code,
                message: body.message.clone().unwrap_or(raw),
            };
        }
        let message = body.message.clone().unwrap_or(raw);
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this failure is an HTTP 401 eligible for the refresh protocol
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}
