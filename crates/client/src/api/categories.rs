//! Home and creative category configuration endpoints
//!
//! The two category families share shapes except that creative categories
//! carry a description; both get the same operation set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{CreativeCategory, HomeCategory};

/// New category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial category update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// One entry in a batch sort update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortOrderUpdate {
    pub id: i64,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
struct SortOrdersRequest<'a> {
    orders: &'a [SortOrderUpdate],
}

#[derive(Debug, Clone, Serialize)]
struct PublishQuery {
    is_published: bool,
}

impl AdminClient {
    // --- home categories ---

    /// List published home categories
    pub async fn list_home_categories(&self) -> Result<Vec<HomeCategory>, ClientError> {
        self.get("/admin/home/categories").await
    }

    /// List all home categories, including unpublished ones
    pub async fn list_all_home_categories(&self) -> Result<Vec<HomeCategory>, ClientError> {
        self.get("/admin/home/categories/all").await
    }

    /// Create a home category
    pub async fn create_home_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<HomeCategory, ClientError> {
        self.post("/admin/home/categories", request).await
    }

    /// Update a home category
    pub async fn update_home_category(
        &self,
        category_id: i64,
        request: &UpdateCategoryRequest,
    ) -> Result<HomeCategory, ClientError> {
        self.put(&format!("/admin/home/categories/{category_id}"), request)
            .await
    }

    /// Delete a home category
    pub async fn delete_home_category(&self, category_id: i64) -> Result<Value, ClientError> {
        self.delete(&format!("/admin/home/categories/{category_id}"))
            .await
    }

    /// Batch-update home category ordering
    pub async fn update_home_sort_orders(
        &self,
        orders: &[SortOrderUpdate],
    ) -> Result<Value, ClientError> {
        self.post("/admin/home/categories/sort", &SortOrdersRequest { orders })
            .await
    }

    /// Publish or unpublish a home category
    pub async fn set_home_category_published(
        &self,
        category_id: i64,
        is_published: bool,
    ) -> Result<Value, ClientError> {
        self.put_with_query(
            &format!("/admin/home/categories/{category_id}/publish"),
            &PublishQuery { is_published },
        )
        .await
    }

    /// Reset home categories to the platform defaults
    pub async fn reset_home_categories(&self) -> Result<Value, ClientError> {
        self.post_empty("/admin/home/categories/reset").await
    }

    // --- creative categories ---

    /// List published creative categories
    pub async fn list_creative_categories(&self) -> Result<Vec<CreativeCategory>, ClientError> {
        self.get("/admin/home/creative-categories").await
    }

    /// List all creative categories, including unpublished ones
    pub async fn list_all_creative_categories(
        &self,
    ) -> Result<Vec<CreativeCategory>, ClientError> {
        self.get("/admin/home/creative-categories/all").await
    }

    /// Create a creative category
    pub async fn create_creative_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<CreativeCategory, ClientError> {
        self.post("/admin/home/creative-categories", request).await
    }

    /// Update a creative category
    pub async fn update_creative_category(
        &self,
        category_id: i64,
        request: &UpdateCategoryRequest,
    ) -> Result<CreativeCategory, ClientError> {
        self.put(
            &format!("/admin/home/creative-categories/{category_id}"),
            request,
        )
        .await
    }

    /// Delete a creative category
    pub async fn delete_creative_category(&self, category_id: i64) -> Result<Value, ClientError> {
        self.delete(&format!("/admin/home/creative-categories/{category_id}"))
            .await
    }

    /// Batch-update creative category ordering
    pub async fn update_creative_sort_orders(
        &self,
        orders: &[SortOrderUpdate],
    ) -> Result<Value, ClientError> {
        self.post(
            "/admin/home/creative-categories/sort",
            &SortOrdersRequest { orders },
        )
        .await
    }

    /// Publish or unpublish a creative category
    pub async fn set_creative_category_published(
        &self,
        category_id: i64,
        is_published: bool,
    ) -> Result<Value, ClientError> {
        self.put_with_query(
            &format!("/admin/home/creative-categories/{category_id}/publish"),
            &PublishQuery { is_published },
        )
        .await
    }

    /// Reset creative categories to the platform defaults
    pub async fn reset_creative_categories(&self) -> Result<Value, ClientError> {
        self.post_empty("/admin/home/creative-categories/reset")
            .await
    }
}
