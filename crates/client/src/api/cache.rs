//! Cache invalidation endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AdminClient;
use crate::error::ClientError;

/// Which backend cache to invalidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    Home,
    Plaza,
    Projects,
    #[default]
    All,
}

#[derive(Debug, Clone, Serialize)]
struct ClearCacheRequest {
    cache_type: CacheType,
}

#[derive(Debug, Clone, Serialize)]
struct ClearPatternRequest<'a> {
    pattern: &'a str,
}

impl AdminClient {
    /// Fetch backend cache statistics (shape is backend-defined)
    pub async fn cache_stats(&self) -> Result<Value, ClientError> {
        self.get("/admin/cache/stats").await
    }

    /// Invalidate the given cache
    pub async fn clear_cache(&self, cache_type: CacheType) -> Result<Value, ClientError> {
        self.post("/admin/cache/clear", &ClearCacheRequest { cache_type })
            .await
    }

    /// Invalidate the home-screen cache
    pub async fn clear_home_cache(&self) -> Result<Value, ClientError> {
        self.post_empty("/admin/cache/clear-home").await
    }

    /// Invalidate the plaza cache
    pub async fn clear_plaza_cache(&self) -> Result<Value, ClientError> {
        self.post_empty("/admin/cache/clear-plaza").await
    }

    /// Invalidate the projects cache
    pub async fn clear_projects_cache(&self) -> Result<Value, ClientError> {
        self.post_empty("/admin/cache/clear-projects").await
    }

    /// Invalidate cache keys matching a pattern
    pub async fn clear_cache_by_pattern(&self, pattern: &str) -> Result<Value, ClientError> {
        self.post("/admin/cache/clear-pattern", &ClearPatternRequest { pattern })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CacheType::All).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&CacheType::Home).unwrap(), "\"home\"");
        assert_eq!(CacheType::default(), CacheType::All);
    }
}
