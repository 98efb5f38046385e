//! Reducer for the application UI slice.

use super::action::AppAction;
use super::state::{AppState, ToastState};
use crate::error::TransitionError;
use crate::root::{RootAction, SliceName};
use crate::slice::{Reducer, Slice};

/// Reducer for toast, loading and theme transitions.
///
/// Timers (toast auto-hide) are owned by the UI collaborator, never here.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Result<Self::State, TransitionError> {
        match action {
            AppAction::ShowToast { message, severity } => {
                if message.trim().is_empty() {
                    return Err(TransitionError::InvalidPayload {
                        action_type: "app/showToast",
                        reason: "message must not be empty".to_string(),
                    });
                }
                Ok(AppState {
                    toast: ToastState {
                        open: true,
                        message: message.clone(),
                        severity: *severity,
                    },
                    ..state
                })
            }

            // Only `open` flips; message and severity are retained.
            AppAction::HideToast => Ok(AppState {
                toast: ToastState {
                    open: false,
                    ..state.toast
                },
                ..state
            }),

            AppAction::SetLoading(loading) => Ok(AppState {
                loading: *loading,
                ..state
            }),

            AppAction::SetTheme(theme) => Ok(AppState {
                theme: *theme,
                ..state
            }),
        }
    }
}

impl Slice for AppReducer {
    const NAME: SliceName = SliceName::App;

    fn accepts(action: &RootAction) -> Option<&Self::Action> {
        match action {
            RootAction::App(action) => Some(action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::app::{Severity, Theme};

    fn visible(message: &str, severity: Severity) -> AppState {
        AppState {
            toast: ToastState {
                open: true,
                message: message.to_string(),
                severity,
            },
            ..AppState::default()
        }
    }

    #[test]
    fn show_toast_opens_with_message_and_severity() {
        let state = AppReducer::reduce(
            AppState::default(),
            &AppAction::ShowToast {
                message: "Saved".to_string(),
                severity: Severity::Success,
            },
        )
        .unwrap();
        assert_eq!(state, visible("Saved", Severity::Success));
    }

    #[test]
    fn show_toast_replaces_visible_toast() {
        let state = AppReducer::reduce(
            visible("First", Severity::Info),
            &AppAction::ShowToast {
                message: "Second".to_string(),
                severity: Severity::Warning,
            },
        )
        .unwrap();
        assert_eq!(state.toast.message, "Second");
        assert_eq!(state.toast.severity, Severity::Warning);
    }

    #[test]
    fn show_toast_rejects_empty_message() {
        let err = AppReducer::reduce(
            AppState::default(),
            &AppAction::ShowToast {
                message: "   ".to_string(),
                severity: Severity::Error,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidPayload {
                action_type: "app/showToast",
                ..
            }
        ));
    }

    #[test]
    fn hide_toast_keeps_message_and_severity() {
        let state =
            AppReducer::reduce(visible("Saved", Severity::Success), &AppAction::HideToast).unwrap();
        assert!(!state.toast.open);
        assert_eq!(state.toast.message, "Saved");
        assert_eq!(state.toast.severity, Severity::Success);
    }

    #[test]
    fn hide_toast_when_hidden_is_unchanged() {
        let state = AppReducer::reduce(AppState::default(), &AppAction::HideToast).unwrap();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn set_loading_and_theme_leave_toast_alone() {
        let start = visible("Saved", Severity::Success);
        let state = AppReducer::reduce(start.clone(), &AppAction::SetLoading(true)).unwrap();
        let state = AppReducer::reduce(state, &AppAction::SetTheme(Theme::Dark)).unwrap();
        assert!(state.loading);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.toast, start.toast);
    }

    #[test]
    fn accepts_only_app_actions() {
        assert!(AppReducer::accepts(&crate::slices::app::hide_toast()).is_some());
        assert!(AppReducer::accepts(&crate::slices::auth::logout()).is_none());
    }
}
