//! Playdeck admin core types and contracts

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod types;

pub use credentials::{CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore};
pub use envelope::{ApiEnvelope, AuthErrorCode, ErrorBody};
pub use error::{CoreError, CoreResult};
