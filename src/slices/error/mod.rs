//! Error slice.
//!
//! The only user-visible channel for failures inside the store. The error
//! middleware and the persistence layer feed it through `error/report`.

mod action;
mod reducer;
mod state;

pub use action::{clear_errors, dismiss_error, report_error, ErrorAction};
pub use reducer::ErrorReducer;
pub use state::{ErrorEntry, ErrorKind, ErrorState, MAX_ERROR_ENTRIES};
