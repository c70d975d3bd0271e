//! Moderation audit-log endpoints

use serde::Serialize;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{Paginated, ReviewLog, ReviewStatus};

/// Filters for the moderation audit log
///
/// Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl AdminClient {
    /// List moderation decisions
    pub async fn list_review_logs(
        &self,
        query: &ReviewLogQuery,
    ) -> Result<Paginated<ReviewLog>, ClientError> {
        self.get_with_query("/admin/review-logs", query).await
    }
}
