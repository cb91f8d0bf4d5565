use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream courts API (default: "http://localhost:4000")
    pub upstream_base_url: String,
    /// Cache TTL in seconds (default: 60)
    pub cache_ttl_seconds: u64,
    /// Maximum number of club-to-place index entries (default: 10,000)
    pub index_max_entries: usize,
    /// Days of cache entries invalidated on a metadata change (default: 7,
    /// matching the query horizon)
    pub invalidation_horizon_days: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UPSTREAM_BASE_URL` - Upstream courts API base URL (default: "http://localhost:4000")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 60)
    /// - `INDEX_MAX_ENTRIES` - Maximum index entries (default: 10,000)
    /// - `INVALIDATION_HORIZON_DAYS` - Metadata invalidation window (default: 7)
    pub fn from_env() -> Self {
        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            index_max_entries: env::var("INDEX_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            invalidation_horizon_days: env::var("INVALIDATION_HORIZON_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_ttl_conversion() {
        let config = Config {
            upstream_base_url: "http://localhost:4000".to_string(),
            cache_ttl_seconds: 120,
            index_max_entries: 10_000,
            invalidation_horizon_days: 7,
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("UPSTREAM_BASE_URL");
        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("INDEX_MAX_ENTRIES");
        env::remove_var("INVALIDATION_HORIZON_DAYS");

        let config = Config::from_env();

        assert_eq!(config.upstream_base_url, "http://localhost:4000");
        assert_eq!(config.cache_ttl_seconds, 60);
        assert_eq!(config.index_max_entries, 10_000);
        assert_eq!(config.invalidation_horizon_days, 7);
    }
}
