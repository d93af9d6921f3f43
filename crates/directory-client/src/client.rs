//! Customer directory HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use panel_core::{AppError, CustomerDirectory, CustomerPost, CustomerProfile};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;

/// Client for the external customer directory.
#[derive(Clone)]
pub struct HttpDirectoryClient {
    http: Client,
    config: DirectoryConfig,
}

impl HttpDirectoryClient {
    /// Create a new client.
    ///
    /// No connection is made until the first call.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let http = Client::builder().build().map_err(DirectoryError::Http)?;
        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, DirectoryError> {
        Self::new(DirectoryConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Find the first profile matching an email.
    pub async fn find_profile(&self, email: &str) -> Result<Option<CustomerProfile>, DirectoryError> {
        let url = self.config.users_url(email);
        let users: Vec<CustomerProfile> = self.get_json(&url).await?;
        debug!("Directory returned {} profiles for {}", users.len(), email);
        Ok(users.into_iter().next())
    }

    /// Fetch posts by a customer, keeping the first `limit` in upstream order.
    pub async fn fetch_posts(
        &self,
        customer_id: u64,
        limit: usize,
    ) -> Result<Vec<CustomerPost>, DirectoryError> {
        let url = self.config.posts_url(customer_id);
        let mut posts: Vec<CustomerPost> = self.get_json(&url).await?;
        debug!(
            "Directory returned {} posts for customer {} (limit {})",
            posts.len(),
            customer_id,
            limit
        );
        posts.truncate(limit);
        Ok(posts)
    }

    /// Issue a GET and decode the JSON body, bounded by the configured timeout.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DirectoryError> {
        let timeout = self.config.timeout;
        debug!("GET {} (timeout {:?})", url, timeout);

        match tokio::time::timeout(timeout, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Directory request timed out after {:?}: {}", timeout, url);
                Err(DirectoryError::Timeout)
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, DirectoryError> {
        let response = self
            .http
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await.map_err(classify_transport)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

fn classify_transport(err: reqwest::Error) -> DirectoryError {
    if err.is_timeout() {
        DirectoryError::Timeout
    } else {
        DirectoryError::Http(err)
    }
}

#[async_trait]
impl CustomerDirectory for HttpDirectoryClient {
    async fn lookup_by_email(&self, email: &str) -> Result<Option<CustomerProfile>, AppError> {
        self.find_profile(email).await.map_err(|e| {
            warn!("Customer lookup failed for {}: {}", email, e);
            AppError::from(e)
        })
    }

    async fn list_posts(
        &self,
        customer_id: u64,
        limit: usize,
    ) -> Result<Vec<CustomerPost>, AppError> {
        self.fetch_posts(customer_id, limit).await.map_err(|e| {
            warn!("Post listing failed for customer {}: {}", customer_id, e);
            AppError::from(e)
        })
    }
}
