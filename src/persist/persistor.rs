//! Rehydration and change-driven writes of the durable record.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::envelope::PersistedEnvelope;
use super::storage::Storage;
use crate::config::PersistConfig;
use crate::error::PersistError;
use crate::root::{RootState, SliceName};
use crate::slice::SliceState;

/// Why the starting snapshot is what it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RehydrateOutcome {
    /// Whitelisted slices were restored from the record.
    Restored,
    /// No record under the key.
    Missing,
    /// The record was written under a different schema version.
    VersionMismatch { expected: u32, found: u32 },
    /// The record could not be parsed or a slice did not decode.
    Corrupt { reason: String },
    /// The storage backend failed to read.
    Unreadable { reason: String },
}

/// Result of [`Persistor::rehydrate`].
#[derive(Debug, Clone)]
pub struct Rehydrated {
    pub state: RootState,
    pub outcome: RehydrateOutcome,
}

/// Writes whitelisted subtrees to storage and restores them at startup.
pub struct Persistor {
    config: PersistConfig,
    storage: Arc<dyn Storage>,
    /// Snapshot of the last successful write; used to skip writes when no
    /// whitelisted subtree changed.
    last_written: Mutex<Option<Arc<RootState>>>,
    paused: AtomicBool,
}

impl Persistor {
    pub fn new(config: PersistConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            config,
            storage,
            last_written: Mutex::new(None),
            paused: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &PersistConfig {
        &self.config
    }

    /// Build the starting snapshot from slice defaults and the stored record.
    ///
    /// Pure read: calling it twice yields the same state. Anything other
    /// than a readable record with the expected version falls back to
    /// defaults as a whole; a record is never partially applied.
    pub fn rehydrate(&self) -> Rehydrated {
        let raw = match self.storage.get_item(&self.config.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults(RehydrateOutcome::Missing),
            Err(e) => {
                tracing::warn!(key = %self.config.key, error = %e, "Failed to read persisted state");
                return defaults(RehydrateOutcome::Unreadable {
                    reason: e.to_string(),
                });
            }
        };

        let envelope = match PersistedEnvelope::parse(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::debug!(key = %self.config.key, error = %e, "Discarding unparsable persisted state");
                return defaults(RehydrateOutcome::Corrupt {
                    reason: e.to_string(),
                });
            }
        };

        if envelope.version != self.config.version {
            tracing::debug!(
                key = %self.config.key,
                expected = self.config.version,
                found = envelope.version,
                "Discarding persisted state with mismatched version"
            );
            return defaults(RehydrateOutcome::VersionMismatch {
                expected: self.config.version,
                found: envelope.version,
            });
        }

        match self.overlay(&envelope.slices) {
            Ok(state) => {
                tracing::debug!(key = %self.config.key, "Rehydrated persisted state");
                Rehydrated {
                    state,
                    outcome: RehydrateOutcome::Restored,
                }
            }
            Err(e) => {
                tracing::debug!(key = %self.config.key, error = %e, "Discarding undecodable persisted state");
                defaults(RehydrateOutcome::Corrupt {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Record `state` as already in storage, so the next write only happens
    /// once a whitelisted subtree actually changes.
    pub fn mark_written(&self, state: &Arc<RootState>) {
        *self.last_written.lock() = Some(Arc::clone(state));
    }

    /// Write the record if a whitelisted subtree changed since the last
    /// write. Returns whether a write happened.
    pub fn persist(&self, state: &Arc<RootState>) -> Result<bool, PersistError> {
        if self.is_paused() {
            return Ok(false);
        }

        let mut last = self.last_written.lock();
        if let Some(previous) = last.as_ref() {
            let changed = self
                .config
                .whitelist
                .iter()
                .any(|name| previous.slice_changed(state, *name));
            if !changed {
                return Ok(false);
            }
        }

        self.write(state)?;
        *last = Some(Arc::clone(state));
        Ok(true)
    }

    /// Write the record unconditionally (the FLUSH step).
    pub fn flush(&self, state: &Arc<RootState>) -> Result<(), PersistError> {
        self.write(state)?;
        *self.last_written.lock() = Some(Arc::clone(state));
        Ok(())
    }

    /// Stop writing until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Resume writing and catch up with `state`.
    pub fn resume(&self, state: &Arc<RootState>) -> Result<bool, PersistError> {
        self.paused.store(false, Ordering::SeqCst);
        self.persist(state)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Delete the durable record. In-memory state is untouched.
    pub fn purge(&self) -> Result<(), PersistError> {
        self.storage.remove_item(&self.config.key)?;
        *self.last_written.lock() = None;
        tracing::info!(key = %self.config.key, "Purged persisted state");
        Ok(())
    }

    /// Serialize the whitelisted subtrees into an envelope.
    pub fn envelope(&self, state: &RootState) -> Result<PersistedEnvelope, PersistError> {
        let mut slices = Map::new();
        for name in &self.config.whitelist {
            let value = state
                .slice_to_json(*name)
                .map_err(|source| PersistError::Serialize {
                    slice: name.as_str(),
                    source,
                })?;
            slices.insert(name.as_str().to_string(), value);
        }
        Ok(PersistedEnvelope {
            key: self.config.key.clone(),
            version: self.config.version,
            slices,
        })
    }

    fn write(&self, state: &RootState) -> Result<(), PersistError> {
        let envelope = self.envelope(state)?;
        let raw = serde_json::to_string(&envelope).map_err(|source| PersistError::Serialize {
            slice: "envelope",
            source,
        })?;
        self.storage.set_item(&self.config.key, &raw)?;
        tracing::trace!(key = %self.config.key, bytes = raw.len(), "Persisted state");
        Ok(())
    }

    fn overlay(&self, slices: &Map<String, Value>) -> Result<RootState, serde_json::Error> {
        let mut state = RootState::default();
        for name in &self.config.whitelist {
            let Some(persisted) = slices.get(name.as_str()) else {
                continue;
            };
            match name {
                SliceName::App => state.app = Arc::new(overlay_slice(persisted)?),
                SliceName::Auth => state.auth = Arc::new(overlay_slice(persisted)?),
                SliceName::Error => state.error = Arc::new(overlay_slice(persisted)?),
            }
        }
        Ok(state)
    }
}

fn defaults(outcome: RehydrateOutcome) -> Rehydrated {
    Rehydrated {
        state: RootState::default(),
        outcome,
    }
}

/// Overlay persisted top-level fields onto the slice default. Fields the
/// record lacks keep their default; fields the slice no longer has are
/// dropped.
fn overlay_slice<T: SliceState>(persisted: &Value) -> Result<T, serde_json::Error> {
    let mut merged = serde_json::to_value(T::default())?;
    match (&mut merged, persisted) {
        (Value::Object(base), Value::Object(stored)) => {
            for (field, value) in stored {
                if base.contains_key(field) {
                    base.insert(field.clone(), value.clone());
                }
            }
        }
        _ => merged = persisted.clone(),
    }
    serde_json::from_value(merged)
}
