//! Development action logger.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::{Middleware, MiddlewareApi, Next};
use crate::error::StoreError;
use crate::root::{RootAction, RootState, SliceName};

/// One logged dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub action_type: String,
    pub payload: Value,
    /// Slices whose subtree changed, in registration order.
    pub changed: Vec<SliceName>,
    /// New value of every changed slice.
    pub diff: Map<String, Value>,
    /// Set when the rest of the chain failed.
    pub error: Option<String>,
}

/// Records action type, payload and the resulting snapshot diff.
///
/// Produces no state change. Keeps the most recent entries in a bounded
/// ring in addition to emitting `tracing` events.
pub struct LoggerMiddleware {
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl LoggerMiddleware {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Logged dispatches, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl Middleware for LoggerMiddleware {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn handle(
        &self,
        api: &MiddlewareApi<'_>,
        action: RootAction,
        next: Next<'_>,
    ) -> Result<Arc<RootState>, StoreError> {
        let before = api.get_state();
        let action_type = action.action_type().to_string();
        let payload = action.payload_json();

        let result = next.run(action);

        let mut entry = LogEntry {
            action_type,
            payload,
            changed: Vec::new(),
            diff: Map::new(),
            error: None,
        };
        match &result {
            Ok(after) => {
                entry.changed = before.changed_slices(after);
                for name in &entry.changed {
                    if let Ok(value) = after.slice_to_json(*name) {
                        entry.diff.insert(name.as_str().to_string(), value);
                    }
                }
                tracing::debug!(
                    action = %entry.action_type,
                    payload = %entry.payload,
                    changed = ?entry.changed,
                    "action"
                );
                let diff = Value::Object(entry.diff.clone());
                tracing::trace!(action = %entry.action_type, diff = %diff, "next state");
            }
            Err(error) => {
                entry.error = Some(error.to_string());
                tracing::debug!(
                    action = %entry.action_type,
                    payload = %entry.payload,
                    error = %error,
                    "action failed"
                );
            }
        }
        self.push(entry);

        result
    }
}
