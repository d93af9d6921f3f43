//! Keeps the reply draft in step with the panel state.

use std::sync::Arc;

use panel_core::ReplyTone;
use reply_composer::{DraftInputs, DraftScheduler};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::snapshot::PanelSnapshot;

/// Watches snapshots and the selected tone, rescheduling the draft whenever
/// its inputs change.
///
/// Bursts of changes inside the scheduler's delay collapse into a single
/// draft, since every schedule supersedes the pending one. Transitions that
/// leave the inputs unchanged, or that leave no usable inputs (ticket not
/// loaded, customer or posts loading), do not reschedule.
pub struct DraftDriver {
    scheduler: Arc<DraftScheduler>,
    tone: watch::Sender<ReplyTone>,
    task: JoinHandle<()>,
}

impl DraftDriver {
    /// Start driving `scheduler` from `snapshots`. Must be called inside a tokio runtime.
    pub fn spawn(
        snapshots: watch::Receiver<PanelSnapshot>,
        scheduler: Arc<DraftScheduler>,
        tone: ReplyTone,
    ) -> Self {
        let (tone_tx, tone_rx) = watch::channel(tone);
        let task = tokio::spawn(drive(snapshots, tone_rx, scheduler.clone()));
        Self {
            scheduler,
            tone: tone_tx,
            task,
        }
    }

    /// Switch the tone; the draft is recomputed if inputs are available.
    pub fn set_tone(&self, tone: ReplyTone) {
        self.tone.send_if_modified(|current| {
            if *current == tone {
                return false;
            }
            *current = tone;
            true
        });
    }

    /// The currently selected tone.
    pub fn tone(&self) -> ReplyTone {
        *self.tone.borrow()
    }

    /// The scheduler being driven.
    pub fn scheduler(&self) -> &DraftScheduler {
        &self.scheduler
    }
}

impl Drop for DraftDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn drive(
    mut snapshots: watch::Receiver<PanelSnapshot>,
    mut tones: watch::Receiver<ReplyTone>,
    scheduler: Arc<DraftScheduler>,
) {
    let mut scheduled: Option<DraftInputs> = None;

    loop {
        let tone = *tones.borrow_and_update();
        let inputs = snapshots.borrow_and_update().draft_inputs(tone);

        if let Some(inputs) = inputs {
            if scheduled.as_ref() != Some(&inputs) {
                debug!("Draft inputs changed; rescheduling ({} tone)", tone);
                scheduler.schedule(inputs.clone());
                scheduled = Some(inputs);
            }
        }

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = tones.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::{CustomerProfile, ResourceState, TicketRecord};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn ticket_only() -> PanelSnapshot {
        PanelSnapshot {
            ticket: ResourceState::Ready(TicketRecord::new("a@b.com", "Late", "Where?")),
            initialized: true,
            ..Default::default()
        }
    }

    fn count_drafts(scheduler: &DraftScheduler) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let mut drafts = scheduler.subscribe();
        let counter = count.clone();
        tokio::spawn(async move {
            while drafts.changed().await.is_ok() {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        count
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_changes_publish_one_draft() {
        let (state, rx) = watch::channel(PanelSnapshot::default());
        let scheduler = Arc::new(DraftScheduler::new(Duration::from_millis(300)));
        let published = count_drafts(&scheduler);
        let _driver = DraftDriver::spawn(rx, scheduler.clone(), ReplyTone::Friendly);

        state.send_replace(ticket_only());
        tokio::time::sleep(Duration::from_millis(50)).await;

        state.send_modify(|s| {
            s.customer = ResourceState::Ready(Some(CustomerProfile::new(1, "Ada")));
        });
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(published.load(Ordering::SeqCst), 1);
        let draft = scheduler.latest().unwrap();
        assert!(draft.text.starts_with("Hi Ada,"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_state_keeps_previous_draft() {
        let (state, rx) = watch::channel(ticket_only());
        let scheduler = Arc::new(DraftScheduler::new(Duration::from_millis(300)));
        let _driver = DraftDriver::spawn(rx, scheduler.clone(), ReplyTone::Friendly);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let first = scheduler.latest().unwrap();

        state.send_modify(|s| s.customer = ResourceState::Loading);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(scheduler.latest(), Some(first));
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tone_change_recomposes() {
        let (_state, rx) = watch::channel(ticket_only());
        let scheduler = Arc::new(DraftScheduler::new(Duration::from_millis(300)));
        let driver = DraftDriver::spawn(rx, scheduler.clone(), ReplyTone::Friendly);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(scheduler.latest().unwrap().tone, ReplyTone::Friendly);

        driver.set_tone(ReplyTone::Concise);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(driver.tone(), ReplyTone::Concise);
        assert_eq!(scheduler.latest().unwrap().tone, ReplyTone::Concise);
    }
}
