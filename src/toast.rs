//! Toast notifications, UI-collaborator side.
//!
//! The store only knows `app/showToast` and `app/hideToast`. Scheduling the
//! automatic hide is the collaborator's job and lives here.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::access::StoreAccess;
use crate::root::RootState;
use crate::slices::app::{hide_toast, show_toast, Severity, ToastState};
use crate::store::{Store, Subscription};

/// How long a toast stays visible before it is hidden automatically.
pub const TOAST_AUTO_HIDE: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug)]
pub struct ToastController {
    access: StoreAccess,
}

impl ToastController {
    pub fn new(access: StoreAccess) -> Self {
        Self { access }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Arc<RootState> {
        self.access.dispatch(show_toast(message, severity))
    }

    /// Explicit user dismissal.
    pub fn dismiss(&self) -> Arc<RootState> {
        self.access.dispatch(hide_toast())
    }

    pub fn current(&self) -> ToastState {
        self.access.select(|state| state.app.toast.clone())
    }

    /// Start the auto-hide timer. Must be called inside a tokio runtime.
    ///
    /// Every time the toast becomes visible (or changes while visible) the
    /// timer restarts; `hideToast` is dispatched once it runs out. A toast
    /// hidden earlier cancels the pending hide.
    pub fn spawn_auto_hide(&self) -> AutoHide {
        let (tx, rx) = watch::channel(self.current());
        let subscription = self.access.subscribe(move |notification| {
            let toast = &notification.state.app.toast;
            tx.send_if_modified(|current| {
                if current == toast {
                    return false;
                }
                *current = toast.clone();
                true
            });
        });
        let task = tokio::spawn(run_auto_hide(self.access.downgrade(), rx));
        AutoHide {
            subscription: Some(subscription),
            task,
        }
    }
}

/// Holds the store weakly: the store owns the sender through its
/// subscriber list, so a strong reference here would keep both alive.
async fn run_auto_hide(store: Weak<Store>, mut rx: watch::Receiver<ToastState>) {
    loop {
        let visible = rx.borrow_and_update().open;
        if visible {
            tokio::select! {
                _ = tokio::time::sleep(TOAST_AUTO_HIDE) => {
                    let Some(store) = store.upgrade() else {
                        break;
                    };
                    tracing::debug!(after_ms = TOAST_AUTO_HIDE.as_millis() as u64, "Auto-hiding toast");
                    store.dispatch(hide_toast());
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        } else if rx.changed().await.is_err() {
            break;
        }
    }
    tracing::trace!("Toast auto-hide stopped");
}

/// Running auto-hide timer. Stops when the handle is dropped, when
/// [`AutoHide::stop`] is called, or when the store goes away.
#[derive(Debug)]
pub struct AutoHide {
    subscription: Option<Subscription>,
    task: JoinHandle<()>,
}

impl AutoHide {
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for AutoHide {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.task.abort();
    }
}
