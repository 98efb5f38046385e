//! Typed read/write contracts for UI collaborators.
//!
//! Collaborators depend on [`SelectState`] and [`DispatchAction`] (or the
//! cloneable [`StoreAccess`] handle) instead of on the store's location or
//! internals.

use std::sync::{Arc, Weak};

use crate::root::{Action, RootAction, RootState};
use crate::store::{Notification, Store, Subscription};

/// Read contract.
pub trait SelectState {
    /// Evaluate `projector` against the current snapshot. Pull-based: every
    /// call reads the snapshot anew, never a cached one.
    fn select<T, F>(&self, projector: F) -> T
    where
        F: FnOnce(&RootState) -> T;
}

/// Write contract.
pub trait DispatchAction {
    fn dispatch(&self, action: RootAction) -> Arc<RootState>;
}

impl SelectState for Store {
    fn select<T, F>(&self, projector: F) -> T
    where
        F: FnOnce(&RootState) -> T,
    {
        projector(&self.get_state())
    }
}

impl DispatchAction for Store {
    fn dispatch(&self, action: RootAction) -> Arc<RootState> {
        Store::dispatch(self, action)
    }
}

/// Shared handle to the single store instance.
#[derive(Clone, Debug)]
pub struct StoreAccess {
    store: Arc<Store>,
}

impl StoreAccess {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn select<T, F>(&self, projector: F) -> T
    where
        F: FnOnce(&RootState) -> T,
    {
        SelectState::select(&*self.store, projector)
    }

    pub fn dispatch(&self, action: impl Into<RootAction>) -> Arc<RootState> {
        self.store.dispatch(action)
    }

    pub fn dispatch_wire(&self, action: Action) -> Arc<RootState> {
        self.store.dispatch_wire(action)
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Notification<'_>) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Reference that does not keep the store alive.
    pub fn downgrade(&self) -> Weak<Store> {
        Arc::downgrade(&self.store)
    }
}

impl SelectState for StoreAccess {
    fn select<T, F>(&self, projector: F) -> T
    where
        F: FnOnce(&RootState) -> T,
    {
        StoreAccess::select(self, projector)
    }
}

impl DispatchAction for StoreAccess {
    fn dispatch(&self, action: RootAction) -> Arc<RootState> {
        StoreAccess::dispatch(self, action)
    }
}
