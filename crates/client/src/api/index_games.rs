//! Index game library endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{GameSourceType, IndexGame, Paginated};

/// Filters for the index game library
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexGameQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<GameSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// New index game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexGameRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_type: GameSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_code: Option<String>,
    pub cover_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_banner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

/// Partial index game update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIndexGameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<GameSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_banner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
struct UpdateWeightRequest {
    weight: i32,
}

impl AdminClient {
    /// List curated index games
    pub async fn list_index_games(
        &self,
        query: &IndexGameQuery,
    ) -> Result<Paginated<IndexGame>, ClientError> {
        self.get_with_query("/admin/list-index-games", query).await
    }

    /// Add a game to the index library
    pub async fn create_index_game(
        &self,
        request: &CreateIndexGameRequest,
    ) -> Result<IndexGame, ClientError> {
        self.post("/admin/create-index-game", request).await
    }

    /// Update an index game
    pub async fn update_index_game(
        &self,
        game_id: &str,
        request: &UpdateIndexGameRequest,
    ) -> Result<IndexGame, ClientError> {
        self.put(&format!("/admin/update-index-game/{game_id}"), request)
            .await
    }

    /// Remove a game from the index library
    pub async fn delete_index_game(&self, game_id: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/admin/delete-index-game/{game_id}"))
            .await
    }

    /// Toggle whether a game appears in the home banner
    pub async fn toggle_banner(&self, game_id: &str) -> Result<Value, ClientError> {
        self.put_empty(&format!("/admin/toggle-banner/{game_id}"))
            .await
    }

    /// Change a game's ordering weight
    pub async fn update_game_weight(
        &self,
        game_id: &str,
        weight: i32,
    ) -> Result<Value, ClientError> {
        self.put(
            &format!("/admin/update-game-weight/{game_id}"),
            &UpdateWeightRequest { weight },
        )
        .await
    }

    /// Upload a cover image, returning the hosted URL payload
    pub async fn upload_game_cover(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ClientError> {
        self.post_multipart("/admin/upload-game-cover", file_name, bytes)
            .await
    }
}
