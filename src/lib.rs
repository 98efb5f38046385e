//! Client-side application state store.
//!
//! State lives in three slices (`app`, `auth`, `error`) combined into one
//! [`RootState`](root::RootState) snapshot. Actions flow through a
//! middleware pipeline into the combinator; whitelisted slices are persisted
//! and rehydrated at startup. UI collaborators talk to the store through
//! [`access`] and [`selectors`].

pub mod access;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod persist;
pub mod root;
pub mod selectors;
pub mod slice;
pub mod slices;
pub mod store;
pub mod toast;

pub use access::{DispatchAction, SelectState, StoreAccess};
pub use config::{BuildMode, Config};
pub use root::{Action, RootAction, RootState};
pub use store::{Notification, Store, StoreBuilder, Subscription};
