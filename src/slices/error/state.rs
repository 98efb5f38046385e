//! State for the error slice.

use serde::{Deserialize, Serialize};

use crate::slice::SliceState;

/// Maximum number of entries retained; the oldest are dropped first.
pub const MAX_ERROR_ENTRIES: usize = 20;

/// Where a reported error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A reducer rejected or panicked on an action.
    Transition,
    /// Reading or writing the durable record failed.
    Persistence,
    /// A wire action could not be decoded.
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub id: u64,
    pub kind: ErrorKind,
    /// Action type or storage key that triggered the error.
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorState {
    pub entries: Vec<ErrorEntry>,
    pub next_id: u64,
}

impl SliceState for ErrorState {}

impl ErrorState {
    pub fn last(&self) -> Option<&ErrorEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
