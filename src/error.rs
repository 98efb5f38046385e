//! Error types shared across the store.
//!
//! Each concern gets its own enum. None of them ever escapes `Store::dispatch`:
//! the error middleware and the subscription loop catch them and route them
//! into the error slice instead.

use std::any::Any;
use std::path::PathBuf;

use thiserror::Error;

/// Raised by a slice reducer when an action is structurally valid but its
/// payload cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Invalid payload for '{action_type}': {reason}")]
    InvalidPayload {
        action_type: &'static str,
        reason: String,
    },

    #[error("Action '{action_type}' not allowed while {state}")]
    InvalidState {
        action_type: &'static str,
        state: &'static str,
    },
}

/// Errors decoding a wire [`Action`](crate::root::Action) into a typed action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Malformed payload for '{action_type}': {source}")]
    InvalidPayload {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode action '{action_type}': {source}")]
    Encode {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the durable storage layer.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize slice '{slice}': {source}")]
    Serialize {
        slice: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage rejected '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Errors raised inside the dispatch pipeline.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Reducer panicked on '{action_type}': {message}")]
    Panicked {
        action_type: String,
        message: String,
    },

    #[error("Action '{action_type}' blocked by {middleware}: {reason}")]
    Blocked {
        action_type: String,
        middleware: &'static str,
        reason: String,
    },
}

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_converts_into_store_error() {
        let err: StoreError = TransitionError::InvalidPayload {
            action_type: "app/showToast",
            reason: "message must not be empty".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid payload for 'app/showToast': message must not be empty"
        );
    }

    #[test]
    fn persist_error_mentions_path() {
        let err = PersistError::Write {
            path: PathBuf::from("/tmp/root.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("/tmp/root.json"));
        assert!(err.to_string().contains("disk full"));
    }
}
