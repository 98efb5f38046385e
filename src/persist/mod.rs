//! Persistence of whitelisted slices across sessions.
//!
//! ```text
//! startup:  Storage ──→ envelope ──→ version check ──→ overlay on defaults
//! dispatch: snapshot ──→ whitelisted subtrees ──→ envelope ──→ Storage
//! ```
//!
//! Write failures never interrupt a transition; the store reports them
//! through the error slice and keeps running in memory.

mod envelope;
mod persistor;
mod storage;

pub use envelope::PersistedEnvelope;
pub use persistor::{Persistor, RehydrateOutcome, Rehydrated};
pub use storage::{is_valid_key, FileStorage, MemoryStorage, Storage};
