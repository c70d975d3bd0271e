//! Session endpoints: login, logout, refresh

use serde::{Deserialize, Serialize};

use crate::client::{AdminClient, LOGIN_ROUTE, REFRESH_ROUTE};
use crate::error::ClientError;
use playdeck_core::credentials::Credentials;

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response payload (enveloped)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Refresh request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Refresh response (raw contract, no envelope)
///
/// `token` is accepted as a legacy alias for `access_token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl AdminClient {
    /// Log in with admin credentials
    ///
    /// On success the returned tokens are persisted to the credential store
    /// and the logout guard is re-armed.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response: LoginResponse = self
            .post(
                LOGIN_ROUTE,
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        self.credentials()
            .store(Credentials {
                access_token: response.access_token.clone(),
                refresh_token: response.refresh_token.clone(),
            })
            .map_err(|err| ClientError::Configuration(err.to_string()))?;
        self.reset_session();

        Ok(response)
    }

    /// Log out and clear the stored session
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.post_empty("/admin/auth/logout").await?;
        self.credentials()
            .clear()
            .map_err(|err| ClientError::Configuration(err.to_string()))?;
        Ok(())
    }

    /// Explicitly refresh the session with the stored refresh token
    ///
    /// Normally the client refreshes transparently on 401; this is for
    /// consumers that want to refresh eagerly. A 401 from this endpoint is
    /// terminal and fires the logout side effect.
    pub async fn refresh_session(&self) -> Result<RefreshResponse, ClientError> {
        let refresh_token = self
            .credentials()
            .refresh_token()
            .ok_or(ClientError::Unauthenticated)?;

        let response: RefreshResponse = self
            .post_raw(REFRESH_ROUTE, &RefreshRequest { refresh_token })
            .await?;

        self.credentials()
            .store(Credentials {
                access_token: response.access_token.clone(),
                refresh_token: response.refresh_token.clone(),
            })
            .map_err(|err| ClientError::Configuration(err.to_string()))?;

        Ok(response)
    }
}
