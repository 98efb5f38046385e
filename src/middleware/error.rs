//! Converts pipeline failures into error-slice reports.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::{Middleware, MiddlewareApi, Next};
use crate::error::{panic_message, StoreError};
use crate::root::{RootAction, RootState};
use crate::slices::error::{report_error, ErrorKind};

/// Always first in the chain.
///
/// Any error or panic raised deeper in the chain (including inside a
/// reducer) is turned into an `error/report` action that runs through the
/// rest of the chain. The original action's effect is dropped and nothing
/// reaches the dispatching caller.
pub struct ErrorMiddleware;

impl Middleware for ErrorMiddleware {
    fn name(&self) -> &'static str {
        "error"
    }

    fn handle(
        &self,
        api: &MiddlewareApi<'_>,
        action: RootAction,
        next: Next<'_>,
    ) -> Result<Arc<RootState>, StoreError> {
        let action_type = action.action_type().to_string();

        let error = match panic::catch_unwind(AssertUnwindSafe(|| next.run(action))) {
            Ok(Ok(state)) => return Ok(state),
            Ok(Err(error)) => error,
            Err(payload) => StoreError::Panicked {
                action_type: action_type.clone(),
                message: panic_message(payload.as_ref()),
            },
        };

        let kind = match error {
            StoreError::Blocked { .. } => ErrorKind::Action,
            _ => ErrorKind::Transition,
        };
        tracing::warn!(action = %action_type, error = %error, "Dispatch failed, reporting");

        let report = report_error(kind, action_type.as_str(), error.to_string());
        match panic::catch_unwind(AssertUnwindSafe(|| next.run(report))) {
            Ok(Ok(state)) => Ok(state),
            Ok(Err(failure)) => {
                tracing::error!(action = %action_type, error = %failure, "Failed to record error report");
                Ok(api.get_state())
            }
            Err(payload) => {
                tracing::error!(
                    action = %action_type,
                    panic = %panic_message(payload.as_ref()),
                    "Error report panicked"
                );
                Ok(api.get_state())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use crate::error::TransitionError;
    use crate::root::combine;
    use crate::slices::app::{show_toast, Severity};
    use parking_lot::RwLock;

    fn dispatch(
        state: &RwLock<Arc<RootState>>,
        action: RootAction,
        fail: impl Fn(&RootAction) -> Option<StoreError>,
    ) -> Result<Arc<RootState>, StoreError> {
        let chain: Vec<Arc<dyn Middleware>> = vec![Arc::new(ErrorMiddleware)];
        let api = MiddlewareApi::new(state, BuildMode::Development);
        let terminal = |action: RootAction| -> Result<Arc<RootState>, StoreError> {
            if let Some(error) = fail(&action) {
                return Err(error);
            }
            if action.action_type() == "test/panic" {
                panic!("reducer exploded");
            }
            let current = state.read().clone();
            let next = combine(&current, &action)?;
            *state.write() = next.clone();
            Ok(next)
        };
        Next::new(&api, &chain, &terminal).run(action)
    }

    #[test]
    fn transition_error_becomes_report() {
        let state = RwLock::new(Arc::new(RootState::default()));
        let result = dispatch(&state, show_toast("", Severity::Info), |_| None).unwrap();

        assert!(!result.app.toast.open);
        let entry = result.error.last().unwrap();
        assert_eq!(entry.kind, ErrorKind::Transition);
        assert_eq!(entry.source, "app/showToast");
        assert!(entry.message.contains("message must not be empty"));
    }

    #[test]
    fn panic_becomes_report() {
        let state = RwLock::new(Arc::new(RootState::default()));
        let action = RootAction::Unrecognized {
            action_type: "test/panic".to_string(),
            payload: None,
        };
        let result = dispatch(&state, action, |_| None).unwrap();
        let entry = result.error.last().unwrap();
        assert_eq!(entry.source, "test/panic");
        assert!(entry.message.contains("reducer exploded"));
    }

    #[test]
    fn failing_report_returns_current_state() {
        let state = RwLock::new(Arc::new(RootState::default()));
        let before = state.read().clone();
        let result = dispatch(&state, show_toast("Hi", Severity::Info), |_| {
            Some(StoreError::Transition(TransitionError::InvalidState {
                action_type: "app/showToast",
                state: "locked",
            }))
        })
        .unwrap();
        assert!(Arc::ptr_eq(&before, &result));
    }

    #[test]
    fn blocked_action_is_reported_as_action_error() {
        let state = RwLock::new(Arc::new(RootState::default()));
        let result = dispatch(&state, show_toast("Hi", Severity::Info), |action| {
            (action.action_type() == "app/showToast").then(|| StoreError::Blocked {
                action_type: "app/showToast".to_string(),
                middleware: "validator",
                reason: "toasts disabled".to_string(),
            })
        })
        .unwrap();
        assert_eq!(result.error.last().unwrap().kind, ErrorKind::Action);
    }
}
