//! Application UI slice.
//!
//! Holds the toast notification, the global loading flag and the theme.
//!
//! # Architecture
//!
//! - `state.rs` - Toast, theme and loading state
//! - `action.rs` - Actions and their creators (`show_toast`, `hide_toast`, ...)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{hide_toast, set_loading, set_theme, show_toast, AppAction};
pub use reducer::AppReducer;
pub use state::{AppState, Severity, Theme, ToastState};
