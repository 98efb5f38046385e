//! The global snapshot.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::slices::app::AppState;
use crate::slices::auth::AuthState;
use crate::slices::error::ErrorState;

/// Key of a slice in the global snapshot.
///
/// The `as_str()` value is the persisted key; do not rename once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceName {
    App,
    Auth,
    Error,
}

impl SliceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Auth => "auth",
            Self::Error => "error",
        }
    }

    /// All slices in registration order.
    pub fn all() -> &'static [SliceName] {
        &[Self::App, Self::Auth, Self::Error]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "app" => Some(Self::App),
            "auth" => Some(Self::Auth),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for SliceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete, immutable global state.
///
/// Subtrees are shared between snapshots through `Arc`; a slice that did
/// not change keeps pointing at the same allocation. Field order is the
/// registration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootState {
    pub app: Arc<AppState>,
    pub auth: Arc<AuthState>,
    pub error: Arc<ErrorState>,
}

impl RootState {
    /// Serialize a single subtree.
    pub fn slice_to_json(&self, name: SliceName) -> Result<serde_json::Value, serde_json::Error> {
        match name {
            SliceName::App => serde_json::to_value(&*self.app),
            SliceName::Auth => serde_json::to_value(&*self.auth),
            SliceName::Error => serde_json::to_value(&*self.error),
        }
    }

    /// Whether the subtree `name` is a different allocation in `other`.
    pub fn slice_changed(&self, other: &RootState, name: SliceName) -> bool {
        match name {
            SliceName::App => !Arc::ptr_eq(&self.app, &other.app),
            SliceName::Auth => !Arc::ptr_eq(&self.auth, &other.auth),
            SliceName::Error => !Arc::ptr_eq(&self.error, &other.error),
        }
    }

    /// Slices whose subtree differs between `self` and `other`, in
    /// registration order.
    pub fn changed_slices(&self, other: &RootState) -> Vec<SliceName> {
        SliceName::all()
            .iter()
            .copied()
            .filter(|name| self.slice_changed(other, *name))
            .collect()
    }
}
