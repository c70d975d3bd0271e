//! Game moderation endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{Game, GameDetail, Paginated};

/// Filters for the review queue
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewQueueQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Moderation decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

/// Moderation decision request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewGameRequest {
    pub game_id: String,
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AdminClient {
    /// List games awaiting (or past) moderation
    pub async fn list_review_games(
        &self,
        query: &ReviewQueueQuery,
    ) -> Result<Paginated<Game>, ClientError> {
        self.get_with_query("/admin/list-review-games", query).await
    }

    /// Approve or reject a game
    pub async fn review_game(&self, request: &ReviewGameRequest) -> Result<Value, ClientError> {
        self.post("/admin/review-game", request).await
    }

    /// Fetch the full detail record for a game
    pub async fn game_detail(&self, game_id: &str) -> Result<GameDetail, ClientError> {
        self.get(&format!("/admin/game-detail/{game_id}")).await
    }
}
