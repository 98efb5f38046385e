//! Change subscriptions.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::panic_message;
use crate::root::RootState;

/// Delivered to every subscriber after each completed dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Notification<'a> {
    /// Type of the dispatched action.
    pub action_type: &'a str,
    /// Snapshot after the dispatch.
    pub state: &'a Arc<RootState>,
    /// False when the dispatch left the snapshot pointer-identical.
    pub changed: bool,
}

type Callback = Arc<dyn Fn(&Notification<'_>) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Callback)>>,
}

impl Subscribers {
    pub(crate) fn add(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push((id, callback));
        Subscription {
            id,
            registry: Arc::downgrade(self),
        }
    }

    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.lock().iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Call every subscriber registered at the start of the notification,
    /// in registration order. A panicking subscriber is logged and skipped.
    pub(crate) fn notify(&self, notification: &Notification<'_>) {
        let callbacks: Vec<(u64, Callback)> = self
            .entries
            .lock()
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect();

        for (id, callback) in callbacks {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(notification))) {
                tracing::error!(
                    subscriber = id,
                    action = %notification.action_type,
                    panic = %panic_message(payload.as_ref()),
                    "Subscriber panicked"
                );
            }
        }
    }
}

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// Dropping the handle keeps the subscription alive; call
/// [`unsubscribe`](Self::unsubscribe) to stop notifications.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Subscribers>,
}

impl Subscription {
    /// Stop receiving notifications. Returns false if already removed or
    /// the store is gone.
    pub fn unsubscribe(self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.remove(self.id))
            .unwrap_or(false)
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.contains(self.id))
            .unwrap_or(false)
    }
}
