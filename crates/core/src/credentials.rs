//! Credential storage for the admin session
//!
//! The client re-reads the store every time it builds a request header, so a
//! refresh that lands mid-flight is picked up by the next (re)issued request.
//! Tokens are written only on login or refresh success and cleared only by
//! the forced-logout side effect.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A credential pair produced by login or refresh
///
/// `refresh_token` is optional: a refresh response that omits it keeps the
/// previously stored refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Credentials {
    /// Create a credential pair with both tokens
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Create a credential pair with only an access token
    pub fn access_only(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }
}

/// Process-wide store for the admin session tokens
pub trait CredentialStore: Send + Sync {
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if any
    fn refresh_token(&self) -> Option<String>;

    /// Persist a new credential pair, keeping the old refresh token when the
    /// new pair does not carry one
    fn store(&self, credentials: Credentials) -> CoreResult<()>;

    /// Remove all stored tokens
    fn clear(&self) -> CoreResult<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredTokens {
    admin_token: Option<String>,
    refresh_token: Option<String>,
}

impl StoredTokens {
    fn apply(&mut self, credentials: Credentials) {
        self.admin_token = Some(credentials.access_token);
        if credentials.refresh_token.is_some() {
            self.refresh_token = credentials.refresh_token;
        }
    }
}

/// In-memory credential store, the default for embedded use and tests
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: RwLock<StoredTokens>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a credential pair
    pub fn with_credentials(credentials: Credentials) -> Self {
        let store = Self::new();
        // Writing to a freshly created store cannot fail
        let _ = store.store(credentials);
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("credential store lock poisoned")
            .admin_token
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("credential store lock poisoned")
            .refresh_token
            .clone()
    }

    fn store(&self, credentials: Credentials) -> CoreResult<()> {
        self.tokens
            .write()
            .expect("credential store lock poisoned")
            .apply(credentials);
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.tokens.write().expect("credential store lock poisoned") = StoredTokens::default();
        Ok(())
    }
}

/// File-backed credential store for CLI-style consumers
///
/// Persists the session as JSON under the user config directory, using the
/// same key names the admin console stores in browser storage.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    tokens: RwLock<StoredTokens>,
}

impl FileCredentialStore {
    /// Open (or initialize) the default store at
    /// `<config dir>/playdeck/credentials.json`
    pub fn open_default() -> CoreResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| CoreError::invalid_config("no user config directory available"))?;
        Self::open(base.join("playdeck").join("credentials.json"))
    }

    /// Open (or initialize) a store at the given path
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let tokens = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredTokens::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    fn persist(&self, tokens: &StoredTokens) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(tokens)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("credential store lock poisoned")
            .admin_token
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("credential store lock poisoned")
            .refresh_token
            .clone()
    }

    fn store(&self, credentials: Credentials) -> CoreResult<()> {
        let mut tokens = self.tokens.write().expect("credential store lock poisoned");
        tokens.apply(credentials);
        self.persist(&tokens)
    }

    fn clear(&self) -> CoreResult<()> {
        let mut tokens = self.tokens.write().expect("credential store lock poisoned");
        *tokens = StoredTokens::default();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryCredentialStore::new();
        assert!(store.access_token().is_none());

        store.store(Credentials::new("T1", "R1")).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("T1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn refresh_token_survives_access_only_update() {
        let store = MemoryCredentialStore::with_credentials(Credentials::new("T1", "R1"));
        store.store(Credentials::access_only("T2")).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("T2"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn file_store_persists_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::open(&path).unwrap();
        store.store(Credentials::new("T1", "R1")).unwrap();

        let reopened = FileCredentialStore::open(&path).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("T1"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("R1"));

        reopened.clear().unwrap();
        assert!(!path.exists());
        let empty = FileCredentialStore::open(&path).unwrap();
        assert!(empty.access_token().is_none());
    }

    #[test]
    fn file_store_uses_admin_token_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::open(&path).unwrap();
        store.store(Credentials::new("T1", "R1")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["admin_token"], "T1");
        assert_eq!(raw["refresh_token"], "R1");
    }
}
