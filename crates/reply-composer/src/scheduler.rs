//! Delayed draft recomputation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use panel_core::ReplyDraft;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::composer::DraftInputs;

/// Default presentation delay before a draft is regenerated.
pub const DEFAULT_DRAFT_DELAY: Duration = Duration::from_millis(300);

/// Schedules draft recomputation after a short delay.
///
/// Each call to [`schedule`](Self::schedule) supersedes any recomputation
/// still waiting: its task is aborted and its generation invalidated, so only
/// the latest trigger ever publishes. Must be used inside a tokio runtime.
pub struct DraftScheduler {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    last_inputs: Mutex<Option<DraftInputs>>,
    drafts: Arc<watch::Sender<Option<ReplyDraft>>>,
}

impl DraftScheduler {
    /// Create a scheduler with the given delay.
    pub fn new(delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            last_inputs: Mutex::new(None),
            drafts: Arc::new(tx),
        }
    }

    /// Get the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a recomputation for `inputs`, cancelling any pending one.
    pub fn schedule(&self, inputs: DraftInputs) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *lock(&self.last_inputs) = Some(inputs.clone());

        let current = self.generation.clone();
        let drafts = self.drafts.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            let draft = inputs.compose();
            debug!(
                "Draft regenerated (generation {}, tone {}, {} chars)",
                generation,
                draft.tone,
                draft.text.len()
            );
            drafts.send_replace(Some(draft));
        });

        if let Some(previous) = lock(&self.pending).replace(handle) {
            previous.abort();
        }
    }

    /// Reschedule the most recent inputs. Returns `false` if there are none.
    pub fn regenerate(&self) -> bool {
        let last = lock(&self.last_inputs).clone();
        match last {
            Some(inputs) => {
                self.schedule(inputs);
                true
            }
            None => false,
        }
    }

    /// Cancel any pending recomputation without publishing.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = lock(&self.pending).take() {
            previous.abort();
        }
    }

    /// Whether a recomputation is waiting to fire.
    pub fn is_pending(&self) -> bool {
        lock(&self.pending)
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// The most recently published draft.
    pub fn latest(&self) -> Option<ReplyDraft> {
        self.drafts.borrow().clone()
    }

    /// Subscribe to published drafts.
    pub fn subscribe(&self) -> watch::Receiver<Option<ReplyDraft>> {
        self.drafts.subscribe()
    }
}

impl Default for DraftScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DRAFT_DELAY)
    }
}

impl Drop for DraftScheduler {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
