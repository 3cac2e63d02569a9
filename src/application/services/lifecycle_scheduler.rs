//! Timed lifecycle transitions for notifications.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::trace;

use crate::domain::NotificationId;

/// Delay between a notification starting to exit and its removal.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(200);

/// Transition a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Starts the exit animation once the display duration elapsed.
    AutoExit,
    /// Removes the notification once the exit animation finished.
    Removal,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoExit => write!(f, "auto-exit"),
            Self::Removal => write!(f, "removal"),
        }
    }
}

type TimerKey = (NotificationId, Transition);

/// Runs one-shot timers keyed by notification and transition.
///
/// Callbacks run to completion on the runtime; a fired timer forgets its own
/// handle before running the callback, so callbacks may schedule further timers.
pub struct LifecycleScheduler {
    runtime: Handle,
    pending: Arc<Mutex<HashMap<TimerKey, AbortHandle>>>,
}

impl LifecycleScheduler {
    /// Spawns timers on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Runs `on_fire` after `delay`.
    ///
    /// A timer already pending for the same key is replaced.
    pub fn schedule<F>(&self, id: NotificationId, transition: Transition, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let key = (id, transition);
        let pending = Arc::clone(&self.pending);

        let mut timers = self.pending.lock();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            pending.lock().remove(&key);
            trace!(%id, %transition, "Timer fired");
            on_fire();
        });

        if let Some(previous) = timers.insert(key, task.abort_handle()) {
            previous.abort();
        }
        trace!(%id, %transition, ?delay, "Timer scheduled");
    }

    /// Cancels a pending timer. Returns whether one was pending.
    pub fn cancel(&self, id: NotificationId, transition: Transition) -> bool {
        match self.pending.lock().remove(&(id, transition)) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<AbortHandle> = self.pending.lock().drain().map(|(_, h)| h).collect();
        for handle in &drained {
            handle.abort();
        }
        drained.len()
    }

    /// Whether a `transition` timer is pending for `id`.
    #[must_use]
    pub fn is_pending(&self, id: NotificationId, transition: Transition) -> bool {
        self.pending.lock().contains_key(&(id, transition))
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

impl fmt::Debug for LifecycleScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleScheduler")
            .field("pending", &self.pending_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        (hits, move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let scheduler = LifecycleScheduler::new(Handle::current());
        let id = NotificationId::new();
        let (hits, on_fire) = counter();

        scheduler.schedule(id, Transition::AutoExit, Duration::from_millis(100), on_fire);
        assert!(scheduler.is_pending(id, Transition::AutoExit));

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending(id, Transition::AutoExit));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let scheduler = LifecycleScheduler::new(Handle::current());
        let id = NotificationId::new();
        let (hits, on_fire) = counter();

        scheduler.schedule(id, Transition::Removal, EXIT_ANIMATION, on_fire);
        assert!(scheduler.cancel(id, Transition::Removal));
        assert!(!scheduler.cancel(id, Transition::Removal));

        tokio::time::sleep(EXIT_ANIMATION * 2).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_clears_pending() {
        let scheduler = LifecycleScheduler::new(Handle::current());
        let (hits, first) = counter();
        let hits_second = Arc::clone(&hits);

        scheduler.schedule(NotificationId::new(), Transition::AutoExit, Duration::from_secs(1), first);
        scheduler.schedule(NotificationId::new(), Transition::Removal, EXIT_ANIMATION, move || {
            hits_second.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(scheduler.pending_count(), 2);

        assert_eq!(scheduler.cancel_all(), 2);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_are_independent() {
        let scheduler = LifecycleScheduler::new(Handle::current());
        let a = NotificationId::new();
        let b = NotificationId::new();
        let (hits_a, fire_a) = counter();
        let (hits_b, fire_b) = counter();

        scheduler.schedule(a, Transition::AutoExit, Duration::from_millis(50), fire_a);
        scheduler.schedule(b, Transition::AutoExit, Duration::from_millis(500), fire_b);

        tokio::time::sleep(Duration::from_millis(51)).await;
        assert_eq!(hits_a.load(Ordering::SeqCst), 1);
        assert_eq!(hits_b.load(Ordering::SeqCst), 0);
        assert!(scheduler.is_pending(b, Transition::AutoExit));
    }
}
