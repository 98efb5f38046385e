//! The root combinator.

use std::sync::Arc;

use crate::error::TransitionError;
use crate::slices::app::AppReducer;
use crate::slices::auth::AuthReducer;
use crate::slices::error::ErrorReducer;
use crate::slice::Slice;

use super::action::RootAction;
use super::state::RootState;

/// Apply `action` to every slice in registration order.
///
/// A slice whose result is equal to its previous value keeps its `Arc`.
/// When no slice changed, the previous snapshot itself is returned, so
/// callers can detect a no-op with `Arc::ptr_eq`. On error nothing is
/// applied: the snapshot is never partially updated.
pub fn combine(
    state: &Arc<RootState>,
    action: &RootAction,
) -> Result<Arc<RootState>, TransitionError> {
    let app = reduce_slice::<AppReducer>(&state.app, action)?;
    let auth = reduce_slice::<AuthReducer>(&state.auth, action)?;
    let error = reduce_slice::<ErrorReducer>(&state.error, action)?;

    if Arc::ptr_eq(&app, &state.app)
        && Arc::ptr_eq(&auth, &state.auth)
        && Arc::ptr_eq(&error, &state.error)
    {
        return Ok(Arc::clone(state));
    }

    Ok(Arc::new(RootState { app, auth, error }))
}

fn reduce_slice<S: Slice>(
    current: &Arc<S::State>,
    action: &RootAction,
) -> Result<Arc<S::State>, TransitionError> {
    let Some(action) = S::accepts(action) else {
        return Ok(Arc::clone(current));
    };

    let next = S::reduce((**current).clone(), action)?;
    if next == **current {
        Ok(Arc::clone(current))
    } else {
        tracing::trace!(slice = S::NAME.as_str(), "slice changed");
        Ok(Arc::new(next))
    }
}
