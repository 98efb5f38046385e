//! Global snapshot, root action and the combinator that ties the slices
//! together.

mod action;
mod combine;
mod state;

pub use action::{Action, RootAction};
pub use combine::combine;
pub use state::{RootState, SliceName};
