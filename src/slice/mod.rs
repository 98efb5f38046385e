//! Slice primitives for the state store.
//!
//! This module provides the base traits every slice implements so the
//! root combinator can drive them uniformly.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Middleware ──→ Combinator ──→ Slice reducers ──→ Snapshot
//!    ↑                                                          │
//!    └──────────────────── UI collaborator ─────────────────────┘
//! ```
//!
//! - **SliceState**: Serializable value owned by exactly one slice
//! - **SliceAction**: Closed set of actions a slice reacts to
//! - **Reducer**: Pure function that transforms slice state based on actions
//! - **Slice**: A reducer bound to a name and a routing rule

mod action;
mod reducer;
mod state;

pub use action::SliceAction;
pub use reducer::{Reducer, Slice};
pub use state::SliceState;
