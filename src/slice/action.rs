//! Base trait for slice actions.

use std::fmt::Debug;

/// Marker trait for a slice's action enum.
///
/// Actions represent:
/// - User intents (dismissing a toast, logging out)
/// - System events (login responses, persistence failures)
///
/// Every variant carries a namespaced wire tag (`app/hideToast`) that must
/// be unique across all slices.
pub trait SliceAction: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// The stable wire tag of this action.
    fn action_type(&self) -> &'static str;
}
