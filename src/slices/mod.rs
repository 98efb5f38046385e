//! Domain slices of the global state.
//!
//! Each slice owns a disjoint subtree of the snapshot and a closed set of
//! actions. Slices never read each other during a transition; cross-slice
//! effects belong in middleware.

pub mod app;
pub mod auth;
pub mod error;
