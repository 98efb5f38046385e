//! The durable record format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What is written under the storage key.
///
/// `slices` holds only whitelisted subtrees, keyed by slice name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    pub key: String,
    pub version: u32,
    pub slices: Map<String, Value>,
}

impl PersistedEnvelope {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
