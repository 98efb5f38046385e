//! Reducer for the error slice.

use super::action::ErrorAction;
use super::state::{ErrorEntry, ErrorState, MAX_ERROR_ENTRIES};
use crate::error::TransitionError;
use crate::root::{RootAction, SliceName};
use crate::slice::{Reducer, Slice};

pub struct ErrorReducer;

impl Reducer for ErrorReducer {
    type State = ErrorState;
    type Action = ErrorAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Result<Self::State, TransitionError> {
        match action {
            ErrorAction::Report {
                kind,
                source,
                message,
            } => {
                let ErrorState {
                    mut entries,
                    next_id,
                } = state;
                entries.push(ErrorEntry {
                    id: next_id,
                    kind: *kind,
                    source: source.clone(),
                    message: message.clone(),
                });
                if entries.len() > MAX_ERROR_ENTRIES {
                    let overflow = entries.len() - MAX_ERROR_ENTRIES;
                    entries.drain(..overflow);
                }
                Ok(ErrorState {
                    entries,
                    next_id: next_id + 1,
                })
            }

            // Unknown ids are a no-op so a double dismissal is harmless.
            ErrorAction::Dismiss { id } => {
                let ErrorState {
                    mut entries,
                    next_id,
                } = state;
                entries.retain(|entry| entry.id != *id);
                Ok(ErrorState { entries, next_id })
            }

            ErrorAction::Clear => Ok(ErrorState {
                entries: Vec::new(),
                next_id: state.next_id,
            }),
        }
    }
}

impl Slice for ErrorReducer {
    const NAME: SliceName = SliceName::Error;

    fn accepts(action: &RootAction) -> Option<&Self::Action> {
        match action {
            RootAction::Error(action) => Some(action),
            _ => None,
        }
    }
}
