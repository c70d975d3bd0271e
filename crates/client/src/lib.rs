//! Playdeck admin API client
//!
//! A reqwest-based client for the Playdeck content platform's admin API.
//! Requests carry the stored bearer token, responses are unwrapped from the
//! server's `{success, data, message}` envelope, and an expired access token
//! is recovered transparently through a single-flight refresh: however many
//! requests hit a 401 concurrently, exactly one refresh call goes out and
//! the rest queue behind it, replaying once it settles.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub(crate) mod session;

pub use client::{AdminClient, AdminClientBuilder, LOGIN_ROUTE, REFRESH_ROUTE};
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::LogoutHook;
