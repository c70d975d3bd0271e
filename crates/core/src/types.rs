//! Domain models for the admin API
//!
//! These mirror the backend's wire shapes and are passed through the client
//! unchanged; the client itself never interprets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Platform user account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Banned,
}

/// Platform user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub status: UserStatus,
    pub work_count: u64,
    pub follower_count: u64,
    pub credit_balance: i64,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A game (user-authored project) pending or past moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub project_type: String,
    pub author_id: String,
    pub author_nickname: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Extended game record returned by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub game: Game,
    pub generation_mode: String,
    pub tech_stack: String,
    pub artifact_type: String,
    pub version_count: u64,
}

/// Direction of a credit ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditChangeType {
    Income,
    Expense,
}

/// One entry in a user's credit ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditFlowEntry {
    pub id: String,
    pub change_type: CreditChangeType,
    pub amount: i64,
    pub balance_after: i64,
    pub source_type: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single credit accounting configuration value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditConfig {
    pub config_key: String,
    pub config_value: i64,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unpaginated list of credit configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditConfigList {
    pub items: Vec<CreditConfig>,
    pub total: u64,
}

/// Platform-wide dashboard counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_users: u64,
    pub active_users: u64,
    pub banned_users: u64,
    pub total_games: u64,
    pub published_games: u64,
    pub pending_games: u64,
    pub total_credits_issued: u64,
    pub total_credits_consumed: u64,
}

/// Outcome of a moderation decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Rejected,
}

/// Audit record of a moderation decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLog {
    pub id: String,
    pub game_id: String,
    pub game_title: String,
    pub admin_id: String,
    pub status: ReviewStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// How an index-library game is sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSourceType {
    Url,
    Code,
}

/// Inline code attached to an index game version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionCodeInfo {
    pub html_code: Option<String>,
    pub code_snapshot: Option<String>,
}

/// A curated game in the index library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexGame {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub source_type: GameSourceType,
    pub game_url: Option<String>,
    pub version_code_id: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub show_in_banner: bool,
    pub weight: i32,
    pub status: String,
    pub play_count: u64,
    pub like_count: u64,
    pub share_count: u64,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_code: Option<VersionCodeInfo>,
}

/// A home-screen content category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeCategory {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub icon: Option<String>,
    pub is_published: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

/// A creative-template category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeCategory {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub is_published: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

/// A creative prompt template offered to users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub prompt: String,
    pub category: String,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub example_output: Option<String>,
    pub game_source_type: Option<String>,
    pub game_url: Option<String>,
    pub game_code: Option<String>,
    pub sort_order: i32,
    pub is_hot: bool,
    pub is_new: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
