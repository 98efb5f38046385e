//! The store: one source of truth for the UI.
//!
//! Lifecycle: construct (combinator + persistence + middleware) →
//! rehydrate → ready. Construction happens once at startup through
//! [`StoreBuilder`]; the resulting `Store` is shared by reference (usually
//! through [`StoreAccess`](crate::access::StoreAccess)) rather than reached
//! through a global.

mod builder;
mod subscription;

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

pub use builder::StoreBuilder;
pub use subscription::{Notification, Subscription};

use crate::config::BuildMode;
use crate::error::{PersistError, StoreError};
use crate::middleware::{
    DefaultMiddleware, LoggerMiddleware, Middleware, MiddlewareApi, Next, PerformanceMiddleware,
};
use crate::persist::{Persistor, RehydrateOutcome};
use crate::root::{combine, Action, RootAction, RootState};
use crate::slices::error::{report_error, ErrorKind};
use subscription::Subscribers;

pub struct Store {
    state: RwLock<Arc<RootState>>,
    chain: Vec<Arc<dyn Middleware>>,
    defaults: DefaultMiddleware,
    persistor: Persistor,
    subscribers: Arc<Subscribers>,
    /// Serializes dispatches across threads; the flag marks a dispatch in
    /// progress on the owning thread so reentrant calls can be refused.
    dispatching: ReentrantMutex<Cell<bool>>,
    mode: BuildMode,
    rehydrate_outcome: RehydrateOutcome,
}

impl Store {
    pub fn builder(config: crate::config::Config) -> StoreBuilder {
        StoreBuilder::new(config)
    }

    /// Current snapshot. Treat it as immutable.
    pub fn get_state(&self) -> Arc<RootState> {
        Arc::clone(&self.state.read())
    }

    /// Run `action` through the middleware chain and the combinator, then
    /// notify subscribers.
    ///
    /// Never fails: errors are recorded in the error slice. A dispatch
    /// issued from inside a reducer or a subscriber is ignored and the
    /// current snapshot is returned.
    pub fn dispatch(&self, action: impl Into<RootAction>) -> Arc<RootState> {
        let action = action.into();
        let flag = self.dispatching.lock();
        if flag.replace(true) {
            tracing::warn!(
                action = %action.action_type(),
                "Ignoring dispatch issued while another dispatch is in progress"
            );
            return self.get_state();
        }
        let _reset = scopeguard::guard((), |_| flag.set(false));

        let action_type = action.action_type().to_string();
        let before = self.get_state();

        let persist_failures: RefCell<Vec<PersistError>> = RefCell::new(Vec::new());
        let terminal = |action: RootAction| -> Result<Arc<RootState>, StoreError> {
            let current = self.get_state();
            let next = combine(&current, &action)?;
            if !Arc::ptr_eq(&current, &next) {
                *self.state.write() = Arc::clone(&next);
                if let Err(e) = self.persistor.persist(&next) {
                    persist_failures.borrow_mut().push(e);
                }
            }
            Ok(next)
        };
        let api = MiddlewareApi::new(&self.state, self.mode);
        let next = Next::new(&api, &self.chain, &terminal);

        if let Err(e) = next.run(action) {
            tracing::error!(action = %action_type, error = %e, "Dispatch failed outside the error middleware");
        }

        for failure in persist_failures.take() {
            tracing::warn!(key = %self.persistor.config().key, error = %failure, "Failed to persist state");
            let report = report_error(
                ErrorKind::Persistence,
                self.persistor.config().key.as_str(),
                failure.to_string(),
            );
            if let Err(e) = next.run(report) {
                tracing::error!(error = %e, "Failed to report persistence error");
            }
        }
        // Failures while reporting are not reported again.
        for failure in persist_failures.take() {
            tracing::debug!(error = %failure, "Dropping repeated persistence failure");
        }

        let after = self.get_state();
        self.subscribers.notify(&Notification {
            action_type: &action_type,
            state: &after,
            changed: !Arc::ptr_eq(&before, &after),
        });
        after
    }

    /// Decode and dispatch a wire action.
    ///
    /// A known type with a malformed payload is reported through the error
    /// slice instead of being dispatched.
    pub fn dispatch_wire(&self, action: Action) -> Arc<RootState> {
        let kind = action.kind.clone();
        match RootAction::from_wire(action) {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                tracing::warn!(action = %kind, error = %e, "Rejected wire action");
                self.dispatch(report_error(ErrorKind::Action, kind, e.to_string()))
            }
        }
    }

    /// Register `callback` for notification after every completed dispatch.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Notification<'_>) + Send + Sync + 'static,
    {
        self.subscribers.add(Arc::new(callback))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// How the starting snapshot was obtained.
    pub fn rehydrate_outcome(&self) -> &RehydrateOutcome {
        &self.rehydrate_outcome
    }

    pub fn persistor(&self) -> &Persistor {
        &self.persistor
    }

    /// Write the current snapshot to storage now.
    pub fn flush(&self) -> Result<(), PersistError> {
        self.persistor.flush(&self.get_state())
    }

    /// Action log; `None` in production.
    pub fn action_log(&self) -> Option<&LoggerMiddleware> {
        self.defaults.logger.as_deref()
    }

    /// Dispatch timings; `None` in production.
    pub fn performance(&self) -> Option<&PerformanceMiddleware> {
        self.defaults.performance.as_deref()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("mode", &self.mode)
            .field(
                "middleware",
                &self.chain.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field("subscribers", &self.subscribers.len())
            .field("rehydrate_outcome", &self.rehydrate_outcome)
            .finish()
    }
}
