//! Reducer and slice traits.

use super::action::SliceAction;
use super::state::SliceState;
use crate::error::TransitionError;
use crate::root::{RootAction, SliceName};

/// Reducer transforms slice state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: SliceAction;

    /// Process an action and return the new state.
    ///
    /// Returns an error only for payloads that cannot be applied. Never
    /// panics for a structurally valid action.
    fn reduce(state: Self::State, action: &Self::Action) -> Result<Self::State, TransitionError>;
}

/// A reducer registered under a slice name in the root state.
pub trait Slice: Reducer {
    /// Key of this slice in the global snapshot.
    const NAME: SliceName;

    /// Extract the part of a root action this slice reacts to.
    fn accepts(action: &RootAction) -> Option<&Self::Action>;
}
