//! Observable panel state.

use panel_core::{
    AppError, CustomerPost, CustomerProfile, ReplyTone, ResourceKind, ResourceState, TicketRecord,
};
use reply_composer::DraftInputs;

/// The three resource states plus the initialization flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub ticket: ResourceState<TicketRecord>,
    /// `Ready(None)` means the directory had no matching customer.
    pub customer: ResourceState<Option<CustomerProfile>>,
    pub posts: ResourceState<Vec<CustomerPost>>,
    pub initialized: bool,
}

/// What the presentation layer should show as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Waiting for the host handshake.
    Connecting,
    /// The ticket could not be loaded; only a full refresh helps.
    Fatal(AppError),
    /// Initialized and the ticket is being (re)loaded.
    Loading,
    /// Initialized but no ticket was ever requested.
    Empty,
    /// Ticket available; customer and posts render their own states.
    Ready,
}

impl PanelSnapshot {
    /// Derive the top-level view.
    pub fn view(&self) -> PanelView {
        match &self.ticket {
            ResourceState::Failed(err) => PanelView::Fatal(err.clone()),
            ResourceState::Ready(_) => PanelView::Ready,
            _ if !self.initialized => PanelView::Connecting,
            ResourceState::Loading => PanelView::Loading,
            ResourceState::NotStarted => PanelView::Empty,
        }
    }

    /// The ticket, if loaded.
    pub fn ticket(&self) -> Option<&TicketRecord> {
        self.ticket.ready()
    }

    /// The customer profile, if one was found.
    pub fn profile(&self) -> Option<&CustomerProfile> {
        self.customer.ready().and_then(|profile| profile.as_ref())
    }

    /// Loaded posts, or an empty slice.
    pub fn posts(&self) -> &[CustomerPost] {
        self.posts.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// State label of one resource, for logs and status lines.
    pub fn label(&self, kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Ticket => self.ticket.label(),
            ResourceKind::Customer => self.customer.label(),
            ResourceKind::Posts => self.posts.label(),
        }
    }

    /// Failure of one resource, if any.
    pub fn error(&self, kind: ResourceKind) -> Option<&AppError> {
        match kind {
            ResourceKind::Ticket => self.ticket.error(),
            ResourceKind::Customer => self.customer.error(),
            ResourceKind::Posts => self.posts.error(),
        }
    }

    /// Whether no resource is currently loading.
    pub fn is_settled(&self) -> bool {
        !self.ticket.is_loading() && !self.customer.is_loading() && !self.posts.is_loading()
    }

    /// Inputs for a draft, once the ticket is loaded and nothing downstream is loading.
    ///
    /// Failed or skipped customer and posts resources contribute nothing, so a
    /// draft is still produced from whatever data is available.
    pub fn draft_inputs(&self, tone: ReplyTone) -> Option<DraftInputs> {
        let ticket = self.ticket.ready()?;
        if self.customer.is_loading() || self.posts.is_loading() {
            return None;
        }
        Some(DraftInputs::new(
            ticket.clone(),
            self.profile().cloned(),
            self.posts().to_vec(),
            tone,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_ticket() -> PanelSnapshot {
        PanelSnapshot {
            ticket: ResourceState::Ready(TicketRecord::new("a@b.com", "s", "d")),
            initialized: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_view_connecting() {
        let mut snapshot = PanelSnapshot::default();
        assert_eq!(snapshot.view(), PanelView::Connecting);
        snapshot.ticket = ResourceState::Loading;
        assert_eq!(snapshot.view(), PanelView::Connecting);
    }

    #[test]
    fn test_view_fatal_before_initialized() {
        let snapshot = PanelSnapshot {
            ticket: ResourceState::Failed(AppError::host("timeout")),
            ..Default::default()
        };
        assert_eq!(snapshot.view(), PanelView::Fatal(AppError::host("timeout")));
    }

    #[test]
    fn test_view_after_initialized() {
        let mut snapshot = PanelSnapshot {
            initialized: true,
            ..Default::default()
        };
        assert_eq!(snapshot.view(), PanelView::Empty);
        snapshot.ticket = ResourceState::Loading;
        assert_eq!(snapshot.view(), PanelView::Loading);
        assert_eq!(ready_ticket().view(), PanelView::Ready);
    }

    #[test]
    fn test_draft_inputs_wait_for_downstream() {
        let mut snapshot = ready_ticket();
        snapshot.customer = ResourceState::Loading;
        assert!(snapshot.draft_inputs(ReplyTone::Friendly).is_none());

        snapshot.customer = ResourceState::Ready(Some(CustomerProfile::new(1, "Ada")));
        snapshot.posts = ResourceState::Loading;
        assert!(snapshot.draft_inputs(ReplyTone::Friendly).is_none());

        snapshot.posts = ResourceState::Ready(vec![CustomerPost::new(1, 1, "t", "b")]);
        let inputs = snapshot.draft_inputs(ReplyTone::Concise).unwrap();
        assert_eq!(inputs.profile.unwrap().name, "Ada");
        assert_eq!(inputs.posts.len(), 1);
        assert_eq!(inputs.tone, ReplyTone::Concise);
    }

    #[test]
    fn test_draft_inputs_degrade_on_failures() {
        let mut snapshot = ready_ticket();
        snapshot.customer = ResourceState::Failed(AppError::network("down"));
        let inputs = snapshot.draft_inputs(ReplyTone::Friendly).unwrap();
        assert!(inputs.profile.is_none());
        assert!(inputs.posts.is_empty());
    }

    #[test]
    fn test_no_draft_without_ticket() {
        assert!(PanelSnapshot::default()
            .draft_inputs(ReplyTone::Friendly)
            .is_none());
    }
}
