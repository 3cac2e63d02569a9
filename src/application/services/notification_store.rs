//! Ordered, observable collection of active notifications.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace};

use crate::domain::{Notification, NotificationId};

/// Immutable snapshot of the store, newest notification first.
pub type NotificationList = Arc<Vec<Notification>>;

/// Holds the active notifications.
///
/// Every mutation builds a new list and publishes it whole, so readers only
/// ever see complete snapshots.
#[derive(Debug)]
pub struct NotificationStore {
    tx: watch::Sender<NotificationList>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Vec::new()));
        Self { tx }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> NotificationList {
        Arc::clone(&self.tx.borrow())
    }

    /// Subscribes to snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NotificationList> {
        self.tx.subscribe()
    }

    /// Number of notifications, exiting ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Whether the store holds no notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Returns a copy of the notification with `id`.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.tx.borrow().iter().find(|n| n.id == id).cloned()
    }

    /// Prepends `notification`.
    ///
    /// Returns `false` and leaves the store untouched if the id is already present.
    pub fn prepend(&self, notification: Notification) -> bool {
        let id = notification.id;
        let inserted = self.tx.send_if_modified(|list| {
            if list.iter().any(|n| n.id == id) {
                return false;
            }
            let mut next = Vec::with_capacity(list.len() + 1);
            next.push(notification);
            next.extend(list.iter().cloned());
            *list = Arc::new(next);
            true
        });

        if inserted {
            trace!(%id, "Notification stored");
        } else {
            debug!(%id, "Duplicate notification id ignored");
        }
        inserted
    }

    /// Flags the notification as exiting.
    ///
    /// Returns `true` only for the call that performed the transition; unknown
    /// or already exiting ids are a no-op.
    pub fn mark_exiting(&self, id: NotificationId) -> bool {
        self.tx.send_if_modified(|list| {
            let Some(pos) = list.iter().position(|n| n.id == id && !n.is_exiting) else {
                return false;
            };
            let mut next = list.as_ref().clone();
            next[pos] = Notification {
                is_exiting: true,
                ..next[pos].clone()
            };
            *list = Arc::new(next);
            true
        })
    }

    /// Deletes the notification, keeping the order of the rest.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&self, id: NotificationId) -> bool {
        self.tx.send_if_modified(|list| {
            if !list.iter().any(|n| n.id == id) {
                return false;
            }
            let next: Vec<Notification> = list.iter().filter(|n| n.id != id).cloned().collect();
            *list = Arc::new(next);
            true
        })
    }

    /// Drops every notification.
    pub fn clear(&self) {
        self.tx.send_if_modified(|list| {
            if list.is_empty() {
                return false;
            }
            *list = Arc::new(Vec::new());
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationRequest, NotifyConfig};
    use tokio_test::{assert_pending, assert_ready, task};

    fn make(message: &str) -> Notification {
        Notification::resolve(
            NotificationId::new(),
            NotificationRequest::info(message),
            &NotifyConfig::default(),
        )
    }

    fn messages(store: &NotificationStore) -> Vec<String> {
        store.snapshot().iter().map(|n| n.message.clone()).collect()
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let store = NotificationStore::new();
        store.prepend(make("first"));
        store.prepend(make("second"));
        store.prepend(make("third"));

        assert_eq!(messages(&store), ["third", "second", "first"]);
        assert!(store.snapshot().iter().all(|n| !n.is_exiting));
    }

    #[test]
    fn test_prepend_rejects_duplicate_id() {
        let store = NotificationStore::new();
        let n = make("once");
        assert!(store.prepend(n.clone()));
        assert!(!store.prepend(n));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mark_exiting_transitions_once() {
        let store = NotificationStore::new();
        let n = make("bye");
        let id = n.id;
        store.prepend(n);

        assert!(store.mark_exiting(id));
        assert!(!store.mark_exiting(id));
        assert!(store.get(id).unwrap().is_exiting);
    }

    #[test]
    fn test_mark_exiting_unknown_id_is_noop() {
        let store = NotificationStore::new();
        store.prepend(make("stay"));
        let before = store.snapshot();

        assert!(!store.mark_exiting(NotificationId::new()));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_mark_exiting_replaces_snapshot() {
        let store = NotificationStore::new();
        let n = make("bye");
        let id = n.id;
        store.prepend(n);
        let before = store.snapshot();

        store.mark_exiting(id);

        assert!(!before[0].is_exiting);
        assert!(store.snapshot()[0].is_exiting);
    }

    #[test]
    fn test_remove_preserves_order() {
        let store = NotificationStore::new();
        let a = make("a");
        let b = make("b");
        let c = make("c");
        let b_id = b.id;
        store.prepend(a);
        store.prepend(b);
        store.prepend(c);

        assert!(store.remove(b_id));
        assert_eq!(messages(&store), ["c", "a"]);
        assert!(!store.remove(b_id));
    }

    #[test]
    fn test_subscribers_only_wake_on_change() {
        let store = NotificationStore::new();
        let mut rx = store.subscribe();

        {
            let mut changed = task::spawn(rx.changed());
            assert!(!store.remove(NotificationId::new()));
            assert_pending!(changed.poll());
        }

        let mut changed = task::spawn(rx.changed());
        assert_pending!(changed.poll());
        store.prepend(make("hello"));
        assert!(changed.is_woken());
        assert_ready!(changed.poll()).unwrap();
    }

    #[test]
    fn test_clear_empties_store() {
        let store = NotificationStore::new();
        store.prepend(make("a"));
        store.prepend(make("b"));
        store.clear();
        assert!(store.is_empty());
    }
}
