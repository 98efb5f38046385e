//! Reducer for the authentication slice.

use super::action::AuthAction;
use super::state::{AuthState, AuthStatus};
use crate::error::TransitionError;
use crate::root::{RootAction, SliceName};
use crate::slice::{Reducer, Slice};

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Result<Self::State, TransitionError> {
        match action {
            AuthAction::LoginStarted => Ok(AuthState {
                status: AuthStatus::Pending,
                error: None,
                ..state
            }),

            AuthAction::LoginSucceeded { user, token } => {
                if token.is_empty() {
                    return Err(TransitionError::InvalidPayload {
                        action_type: "auth/loginSucceeded",
                        reason: "token must not be empty".to_string(),
                    });
                }
                Ok(AuthState {
                    status: AuthStatus::Authenticated,
                    user: Some(user.clone()),
                    token: Some(token.clone()),
                    error: None,
                })
            }

            AuthAction::LoginFailed { message } => Ok(AuthState {
                status: AuthStatus::Failed,
                user: None,
                token: None,
                error: Some(message.clone()),
            }),

            AuthAction::TokenRefreshed { token } => {
                if state.status != AuthStatus::Authenticated {
                    return Err(TransitionError::InvalidState {
                        action_type: "auth/tokenRefreshed",
                        state: state.status.as_str(),
                    });
                }
                if token.is_empty() {
                    return Err(TransitionError::InvalidPayload {
                        action_type: "auth/tokenRefreshed",
                        reason: "token must not be empty".to_string(),
                    });
                }
                Ok(AuthState {
                    token: Some(token.clone()),
                    ..state
                })
            }

            AuthAction::Logout => Ok(AuthState::default()),
        }
    }
}

impl Slice for AuthReducer {
    const NAME: SliceName = SliceName::Auth;

    fn accepts(action: &RootAction) -> Option<&Self::Action> {
        match action {
            RootAction::Auth(action) => Some(action),
            _ => None,
        }
    }
}
