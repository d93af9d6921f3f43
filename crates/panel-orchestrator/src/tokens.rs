//! Per-resource request tokens.

use std::sync::atomic::{AtomicU64, Ordering};

use panel_core::ResourceKind;

/// Monotonic request counters, one per resource.
///
/// A response is applied only if the token it was issued with is still the
/// latest for its resource; anything older is a stale response.
#[derive(Debug, Default)]
pub(crate) struct RequestTokens {
    ticket: AtomicU64,
    customer: AtomicU64,
    posts: AtomicU64,
}

impl RequestTokens {
    fn counter(&self, kind: ResourceKind) -> &AtomicU64 {
        match kind {
            ResourceKind::Ticket => &self.ticket,
            ResourceKind::Customer => &self.customer,
            ResourceKind::Posts => &self.posts,
        }
    }

    /// Issue a fresh token, superseding every earlier one.
    pub(crate) fn issue(&self, kind: ResourceKind) -> u64 {
        self.counter(kind).fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Supersede any outstanding request without issuing a new one.
    pub(crate) fn invalidate(&self, kind: ResourceKind) {
        self.counter(kind).fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn is_current(&self, kind: ResourceKind, token: u64) -> bool {
        self.counter(kind).load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_supersedes() {
        let tokens = RequestTokens::default();
        let first = tokens.issue(ResourceKind::Customer);
        let second = tokens.issue(ResourceKind::Customer);

        assert!(!tokens.is_current(ResourceKind::Customer, first));
        assert!(tokens.is_current(ResourceKind::Customer, second));
    }

    #[test]
    fn test_resources_independent() {
        let tokens = RequestTokens::default();
        let customer = tokens.issue(ResourceKind::Customer);
        tokens.issue(ResourceKind::Posts);
        tokens.invalidate(ResourceKind::Posts);

        assert!(tokens.is_current(ResourceKind::Customer, customer));
    }

    #[test]
    fn test_invalidate() {
        let tokens = RequestTokens::default();
        let token = tokens.issue(ResourceKind::Ticket);
        tokens.invalidate(ResourceKind::Ticket);
        assert!(!tokens.is_current(ResourceKind::Ticket, token));
    }
}
