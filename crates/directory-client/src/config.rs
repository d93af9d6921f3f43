//! Configuration for the directory client.

use std::env;
use std::time::Duration;

use crate::error::DirectoryError;

/// Default directory base URL.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default per-call timeout (5 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration for connecting to the customer directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the directory (e.g., "https://jsonplaceholder.typicode.com").
    pub base_url: String,
    /// Timeout applied to each call, covering request and body.
    pub timeout: Duration,
}

impl DirectoryConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_BASE_URL` - Directory URL (default: https://jsonplaceholder.typicode.com)
    /// - `DIRECTORY_TIMEOUT_MS` - Per-call timeout in milliseconds (default: 5000)
    pub fn from_env() -> Result<Self, DirectoryError> {
        let base_url =
            env::var("DIRECTORY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(DirectoryError::Config(
                "DIRECTORY_BASE_URL is empty".to_string(),
            ));
        }

        let timeout = match env::var("DIRECTORY_TIMEOUT_MS") {
            Ok(v) => {
                let millis: u64 = v.parse().map_err(|_| {
                    DirectoryError::Config(format!("DIRECTORY_TIMEOUT_MS is not a number: {}", v))
                })?;
                Duration::from_millis(millis)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(base_url).with_timeout(timeout))
    }

    /// Get the profile lookup URL for an email.
    pub fn users_url(&self, email: &str) -> String {
        format!(
            "{}/users?email={}",
            self.base_url,
            urlencoding::encode(email)
        )
    }

    /// Get the posts URL for a customer.
    pub fn posts_url(&self, customer_id: u64) -> String {
        format!("{}/posts?userId={}", self.base_url, customer_id)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
