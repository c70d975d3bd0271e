//! Dashboard statistics endpoints

use crate::client::AdminClient;
use crate::error::ClientError;
use playdeck_core::types::PlatformStats;

impl AdminClient {
    /// Fetch platform-wide counters for the dashboard
    pub async fn platform_stats(&self) -> Result<PlatformStats, ClientError> {
        self.get("/admin/get-platform-stats").await
    }
}
