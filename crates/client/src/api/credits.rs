//! Credit accounting configuration endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::CreditConfigList;

/// A single credit config value change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditConfigUpdate {
    pub config_key: String,
    pub config_value: i64,
}

#[derive(Debug, Clone, Serialize)]
struct BatchUpdateRequest<'a> {
    configs: &'a [CreditConfigUpdate],
}

impl AdminClient {
    /// List all credit accounting configs
    pub async fn list_credit_configs(&self) -> Result<CreditConfigList, ClientError> {
        self.get("/admin/list-credit-configs").await
    }

    /// Update one credit config value
    pub async fn update_credit_config(
        &self,
        update: &CreditConfigUpdate,
    ) -> Result<Value, ClientError> {
        self.put("/admin/update-credit-config", update).await
    }

    /// Update several credit config values in one call
    pub async fn batch_update_credit_configs(
        &self,
        configs: &[CreditConfigUpdate],
    ) -> Result<Value, ClientError> {
        self.put(
            "/admin/batch-update-credit-configs",
            &BatchUpdateRequest { configs },
        )
        .await
    }
}
