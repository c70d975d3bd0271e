//! Creative template endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{CreativeTemplate, Paginated};

/// Filters for the creative template list
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreativeTemplateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// New creative template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCreativeTemplateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub prompt: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

/// Partial creative template update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCreativeTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AdminClient {
    /// List creative templates
    pub async fn list_creative_templates(
        &self,
        query: &CreativeTemplateQuery,
    ) -> Result<Paginated<CreativeTemplate>, ClientError> {
        self.get_with_query("/admin/creative-templates", query)
            .await
    }

    /// Create a creative template
    pub async fn create_creative_template(
        &self,
        request: &CreateCreativeTemplateRequest,
    ) -> Result<CreativeTemplate, ClientError> {
        self.post("/admin/creative-templates", request).await
    }

    /// Update a creative template
    pub async fn update_creative_template(
        &self,
        template_id: &str,
        request: &UpdateCreativeTemplateRequest,
    ) -> Result<CreativeTemplate, ClientError> {
        self.put(&format!("/admin/creative-templates/{template_id}"), request)
            .await
    }

    /// Delete a creative template
    pub async fn delete_creative_template(&self, template_id: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/admin/creative-templates/{template_id}"))
            .await
    }

    /// Toggle a template between online and offline
    pub async fn toggle_template_status(&self, template_id: &str) -> Result<Value, ClientError> {
        self.post_empty(&format!(
            "/admin/creative-templates/{template_id}/toggle-status"
        ))
        .await
    }
}
