//! Typed endpoint methods, grouped by admin resource
//!
//! Each module adds methods to [`crate::AdminClient`]. All endpoints are
//! enveloped unless noted; payloads are passed through unchanged.

pub mod auth;
pub mod cache;
pub mod categories;
pub mod credits;
pub mod games;
pub mod index_games;
pub mod review_logs;
pub mod stats;
pub mod templates;
pub mod users;
