//! Client configuration

use std::time::Duration;

/// Base URL used when none is configured, matching the admin backend's
/// default development port
pub const DEFAULT_BASE_URL: &str = "http://localhost:8088";

/// Environment variable consulted by [`ClientConfig::from_env`]
pub const BASE_URL_ENV: &str = "PLAYDECK_ADMIN_API_URL";

const DEFAULT_USER_AGENT: &str = concat!("playdeck-admin-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for building an [`crate::AdminClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }
}
