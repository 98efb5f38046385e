//! Projections from the snapshot used by UI collaborators.

use crate::root::RootState;
use crate::slices::app::{Theme, ToastState};
use crate::slices::auth::User;
use crate::slices::error::ErrorEntry;

pub fn select_toast(state: &RootState) -> &ToastState {
    &state.app.toast
}

pub fn select_theme(state: &RootState) -> Theme {
    state.app.theme
}

pub fn select_is_loading(state: &RootState) -> bool {
    state.app.loading
}

pub fn select_is_authenticated(state: &RootState) -> bool {
    state.auth.is_authenticated()
}

pub fn select_current_user(state: &RootState) -> Option<&User> {
    state.auth.user.as_ref()
}

pub fn select_auth_token(state: &RootState) -> Option<&str> {
    state.auth.token.as_deref()
}

pub fn select_errors(state: &RootState) -> &[ErrorEntry] {
    &state.error.entries
}

pub fn select_last_error(state: &RootState) -> Option<&ErrorEntry> {
    state.error.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::combine;
    use crate::slices::auth::login_succeeded;
    use std::sync::Arc;

    #[test]
    fn auth_selectors_follow_login() {
        let state = Arc::new(RootState::default());
        assert!(!select_is_authenticated(&state));
        assert!(select_current_user(&state).is_none());

        let user = User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        };
        let state = combine(&state, &login_succeeded(user.clone(), "tok")).unwrap();
        assert!(select_is_authenticated(&state));
        assert_eq!(select_current_user(&state), Some(&user));
        assert_eq!(select_auth_token(&state), Some("tok"));
    }

    #[test]
    fn defaults() {
        let state = RootState::default();
        assert_eq!(select_theme(&state), Theme::Light);
        assert!(!select_is_loading(&state));
        assert!(select_errors(&state).is_empty());
        assert!(select_last_error(&state).is_none());
        assert!(!select_toast(&state).open);
    }
}
