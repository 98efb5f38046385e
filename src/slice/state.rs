//! Base trait for slice state.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq is the change-detection rule)
/// - Serializable (whitelisted slices are persisted as JSON)
pub trait SliceState:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
