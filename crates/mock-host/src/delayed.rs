//! Delayed directory - wraps another directory with artificial delay.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use panel_core::{AppError, CustomerDirectory, CustomerPost, CustomerProfile};
use tokio::time::sleep;

/// A directory that wraps another directory and delays every call.
///
/// Queued delays are consumed one per call, in call order, before falling back
/// to the default delay. Useful for timeout handling and for making two
/// overlapping requests resolve in a chosen order.
pub struct DelayedDirectory<D: CustomerDirectory> {
    inner: D,
    delay: Duration,
    queued: Arc<Mutex<VecDeque<Duration>>>,
}

impl<D: CustomerDirectory> DelayedDirectory<D> {
    /// Create a new DelayedDirectory wrapping the given directory.
    pub fn new(inner: D, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            queued: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a directory with a delay in milliseconds.
    pub fn with_millis(inner: D, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Delays for the next calls, in order.
    pub fn with_queued_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.queued
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend(delays);
        self
    }

    fn next_delay(&self) -> Duration {
        self.queued
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
            .unwrap_or(self.delay)
    }
}

#[async_trait]
impl<D: CustomerDirectory> CustomerDirectory for DelayedDirectory<D> {
    async fn lookup_by_email(&self, email: &str) -> Result<Option<CustomerProfile>, AppError> {
        let delay = self.next_delay();
        sleep(delay).await;
        self.inner.lookup_by_email(email).await
    }

    async fn list_posts(
        &self,
        customer_id: u64,
        limit: usize,
    ) -> Result<Vec<CustomerPost>, AppError> {
        let delay = self.next_delay();
        sleep(delay).await;
        self.inner.list_posts(customer_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryDirectory;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_delayed_directory() {
        let directory = DelayedDirectory::with_millis(InMemoryDirectory::new(), 100);

        let start = Instant::now();
        let result = directory.lookup_by_email("a@b.com").await.unwrap();
        assert!(result.is_none());
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_delays_consumed_in_order() {
        let directory = DelayedDirectory::with_millis(InMemoryDirectory::new(), 10)
            .with_queued_delays([Duration::from_millis(500)]);

        let start = Instant::now();
        directory.lookup_by_email("a@b.com").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = Instant::now();
        directory.lookup_by_email("a@b.com").await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
