//! User management endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::{CreditFlowEntry, Paginated, User, UserStatus};

/// Filters for the user list
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Manual credit adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustCreditRequest {
    pub user_id: String,
    pub amount: i64,
    pub reason: String,
}

/// Filters for a user's credit ledger
#[derive(Debug, Clone, Serialize)]
pub struct CreditFlowQuery {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Account status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub user_id: String,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AdminClient {
    /// List platform users
    pub async fn list_users(&self, query: &UserListQuery) -> Result<Paginated<User>, ClientError> {
        self.get_with_query("/admin/list-users", query).await
    }

    /// Adjust a user's credit balance
    pub async fn adjust_user_credit(
        &self,
        request: &AdjustCreditRequest,
    ) -> Result<Value, ClientError> {
        self.post("/admin/adjust-user-credit", request).await
    }

    /// Fetch a user's credit ledger
    pub async fn user_credit_flow(
        &self,
        query: &CreditFlowQuery,
    ) -> Result<Paginated<CreditFlowEntry>, ClientError> {
        self.get_with_query("/admin/get-user-credit-flow", query)
            .await
    }

    /// Ban or reinstate a user
    pub async fn update_user_status(
        &self,
        request: &UpdateUserStatusRequest,
    ) -> Result<Value, ClientError> {
        self.post("/admin/update-user-status", request).await
    }
}
