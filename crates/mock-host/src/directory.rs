//! In-memory customer directory.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use panel_core::{AppError, CustomerDirectory, CustomerPost, CustomerProfile};

/// A call observed by [`InMemoryDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    Lookup(String),
    Posts { customer_id: u64, limit: usize },
}

#[derive(Debug, Default)]
struct Inner {
    profiles: HashMap<String, CustomerProfile>,
    posts: HashMap<u64, Vec<CustomerPost>>,
    lookup_failures: VecDeque<AppError>,
    posts_failures: VecDeque<AppError>,
    calls: Vec<DirectoryCall>,
}

/// Directory backed by maps, recording every call.
///
/// Queued failures are returned by the next matching calls, one per call,
/// before falling back to the stored data. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under an email.
    pub fn with_profile(self, email: impl Into<String>, profile: CustomerProfile) -> Self {
        self.lock().profiles.insert(email.into(), profile);
        self
    }

    /// Register posts for a customer, in upstream order.
    pub fn with_posts(self, customer_id: u64, posts: Vec<CustomerPost>) -> Self {
        self.lock().posts.insert(customer_id, posts);
        self
    }

    /// Make the next lookup fail.
    pub fn fail_next_lookup(&self, err: AppError) {
        self.lock().lookup_failures.push_back(err);
    }

    /// Make the next post listing fail.
    pub fn fail_next_posts(&self, err: AppError) {
        self.lock().posts_failures.push_back(err);
    }

    /// Replace a customer's posts.
    pub fn set_posts(&self, customer_id: u64, posts: Vec<CustomerPost>) {
        self.lock().posts.insert(customer_id, posts);
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.lock().calls.clone()
    }

    /// Number of lookups so far.
    pub fn lookup_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, DirectoryCall::Lookup(_)))
            .count()
    }

    /// Number of post listings so far.
    pub fn posts_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, DirectoryCall::Posts { .. }))
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryDirectory {
    async fn lookup_by_email(&self, email: &str) -> Result<Option<CustomerProfile>, AppError> {
        let mut inner = self.lock();
        inner.calls.push(DirectoryCall::Lookup(email.to_string()));
        if let Some(err) = inner.lookup_failures.pop_front() {
            return Err(err);
        }
        Ok(inner.profiles.get(email).cloned())
    }

    async fn list_posts(
        &self,
        customer_id: u64,
        limit: usize,
    ) -> Result<Vec<CustomerPost>, AppError> {
        let mut inner = self.lock();
        inner.calls.push(DirectoryCall::Posts { customer_id, limit });
        if let Some(err) = inner.posts_failures.pop_front() {
            return Err(err);
        }
        Ok(inner
            .posts
            .get(&customer_id)
            .map(|posts| posts.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_posts_respect_limit() {
        let posts = (1..=5).map(|i| CustomerPost::new(i, 1, format!("p{}", i), "")).collect();
        let directory = InMemoryDirectory::new().with_posts(1, posts);

        let listed = directory.list_posts(1, 3).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].title, "p1");
        assert_eq!(
            directory.calls(),
            vec![DirectoryCall::Posts { customer_id: 1, limit: 3 }]
        );
    }

    #[tokio::test]
    async fn test_queued_failure_then_data() {
        let directory =
            InMemoryDirectory::new().with_profile("a@b.com", CustomerProfile::new(1, "Ada"));
        directory.fail_next_lookup(AppError::network("down"));

        assert!(directory.lookup_by_email("a@b.com").await.is_err());
        assert!(directory.lookup_by_email("a@b.com").await.unwrap().is_some());
        assert_eq!(directory.lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_email_is_absent() {
        let directory = InMemoryDirectory::new();
        assert!(directory.lookup_by_email("x@y.z").await.unwrap().is_none());
    }
}
