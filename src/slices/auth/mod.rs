//! Authentication slice.
//!
//! Network calls live with the UI collaborator; only their outcomes are
//! dispatched here.

mod action;
mod reducer;
mod state;

pub use action::{login_failed, login_started, login_succeeded, logout, token_refreshed, AuthAction};
pub use reducer::AuthReducer;
pub use state::{AuthState, AuthStatus, User};
