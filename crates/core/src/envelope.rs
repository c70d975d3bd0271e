//! Server response envelope and backend auth error codes
//!
//! Every enveloped admin endpoint responds with `{success, data, message}`;
//! callers of the client only ever see the inner `data` payload. Whether an
//! endpoint is enveloped or raw is part of its contract, not something
//! inferred from the response shape at runtime.

use serde::{Deserialize, Serialize};

/// Standard response envelope for enveloped admin endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its inner payload
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Error body returned by the backend on failed requests
///
/// `error` carries a backend-defined code; a fixed subset of codes marks
/// token problems that no refresh can fix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Classify the error code as a terminal auth error, if it is one
    pub fn auth_code(&self) -> Option<AuthErrorCode> {
        self.error.as_deref().and_then(AuthErrorCode::from_code)
    }
}

/// Backend auth error codes that a token refresh cannot recover from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorCode {
    /// AUTH_001: no token supplied
    #[serde(rename = "AUTH_001")]
    MissingToken,
    /// AUTH_002: token signature rejected
    #[serde(rename = "AUTH_002")]
    InvalidSignature,
    /// AUTH_003: token format is invalid
    #[serde(rename = "AUTH_003")]
    MalformedToken,
    /// AUTH_004: token has been revoked
    #[serde(rename = "AUTH_004")]
    TokenRevoked,
    /// AUTH_005: account is disabled
    #[serde(rename = "AUTH_005")]
    AccountDisabled,
}

impl AuthErrorCode {
    /// Parse a backend error code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AUTH_001" => Some(Self::MissingToken),
            "AUTH_002" => Some(Self::InvalidSignature),
            "AUTH_003" => Some(Self::MalformedToken),
            "AUTH_004" => Some(Self::TokenRevoked),
            "AUTH_005" => Some(Self::AccountDisabled),
            _ => None,
        }
    }

    /// The wire representation of this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingToken => "AUTH_001",
            Self::InvalidSignature => "AUTH_002",
            Self::MalformedToken => "AUTH_003",
            Self::TokenRevoked => "AUTH_004",
            Self::AccountDisabled => "AUTH_005",
        }
    }
}

impl std::fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_unwraps_inner_payload() {
        let body = json!({"success": true, "data": {"foo": 1}, "message": "ok"});
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.into_data(), json!({"foo": 1}));
    }

    #[test]
    fn envelope_tolerates_missing_message() {
        let body = json!({"success": true, "data": [1, 2, 3]});
        let envelope: ApiEnvelope<Vec<u8>> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert!(envelope.message.is_empty());
    }

    #[test]
    fn auth_codes_round_trip() {
        for code in ["AUTH_001", "AUTH_002", "AUTH_003", "AUTH_004", "AUTH_005"] {
            let parsed = AuthErrorCode::from_code(code).unwrap();
            assert_eq!(parsed.as_str(), code);
        }
        assert!(AuthErrorCode::from_code("AUTH_999").is_none());
        assert!(AuthErrorCode::from_code("RATE_001").is_none());
    }

    #[test]
    fn error_body_classifies_auth_codes() {
        let body: ErrorBody =
            serde_json::from_value(json!({"error": "AUTH_003", "message": "bad token"})).unwrap();
        assert_eq!(body.auth_code(), Some(AuthErrorCode::MalformedToken));

        let body: ErrorBody = serde_json::from_value(json!({"message": "nope"})).unwrap();
        assert!(body.auth_code().is_none());
    }
}
