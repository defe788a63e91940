use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
///
/// Identity provider settings are read separately by
/// `wishlist_auth::AuthConfig`.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding lists and items (default: "wishlist")
    pub table_name: String,
    /// Secondary index resolving a wishlist record by its sort key
    /// (default: "wishlist_id")
    pub index_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - table name (default: "wishlist")
    /// - `DYNAMODB_INDEX_NAME` - sort-key index name (default: "wishlist_id")
    /// - `REQUEST_TIMEOUT_SECS` - per-request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "wishlist".to_string()),
            index_name: env::var("DYNAMODB_INDEX_NAME")
                .unwrap_or_else(|_| "wishlist_id".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
