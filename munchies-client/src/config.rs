//! Client configuration

use crate::{ClientError, ClientResult};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of status lookups allowed in flight at once
pub const DEFAULT_STATUS_CONCURRENCY: usize = 8;

/// Client configuration for connecting to the restaurant backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MUNCHIES_BACKEND_URL | http://localhost:8080 | Backend base URL |
/// | MUNCHIES_REQUEST_TIMEOUT | 30 | Per-request timeout (seconds) |
/// | MUNCHIES_STATUS_CONCURRENCY | 8 | Max concurrent status lookups |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Upper bound on in-flight `/api/open/{id}` lookups
    pub status_concurrency: usize,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            status_concurrency: DEFAULT_STATUS_CONCURRENCY,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MUNCHIES_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
            .with_timeout(
                std::env::var("MUNCHIES_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
            .with_status_concurrency(
                std::env::var("MUNCHIES_STATUS_CONCURRENCY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_STATUS_CONCURRENCY),
            )
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the status lookup fan-out limit
    pub fn with_status_concurrency(mut self, limit: usize) -> Self {
        self.status_concurrency = limit;
        self
    }

    /// Check the configuration before building a client from it
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        if self.status_concurrency == 0 {
            return Err(ClientError::Config(
                "status_concurrency must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Join a backend-relative path (e.g. an image reference) onto the base URL
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
