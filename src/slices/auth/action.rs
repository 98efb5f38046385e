//! Actions for the authentication slice.

use serde::{Deserialize, Serialize};

use super::state::User;
use crate::root::RootAction;
use crate::slice::SliceAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AuthAction {
    #[serde(rename = "auth/loginStarted")]
    LoginStarted,
    #[serde(rename = "auth/loginSucceeded")]
    LoginSucceeded { user: User, token: String },
    #[serde(rename = "auth/loginFailed")]
    LoginFailed { message: String },
    #[serde(rename = "auth/tokenRefreshed")]
    TokenRefreshed { token: String },
    #[serde(rename = "auth/logout")]
    Logout,
}

impl AuthAction {
    pub const TYPES: &'static [&'static str] = &[
        "auth/loginStarted",
        "auth/loginSucceeded",
        "auth/loginFailed",
        "auth/tokenRefreshed",
        "auth/logout",
    ];
}

impl SliceAction for AuthAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::LoginStarted => "auth/loginStarted",
            Self::LoginSucceeded { .. } => "auth/loginSucceeded",
            Self::LoginFailed { .. } => "auth/loginFailed",
            Self::TokenRefreshed { .. } => "auth/tokenRefreshed",
            Self::Logout => "auth/logout",
        }
    }
}

pub fn login_started() -> RootAction {
    RootAction::Auth(AuthAction::LoginStarted)
}

pub fn login_succeeded(user: User, token: impl Into<String>) -> RootAction {
    RootAction::Auth(AuthAction::LoginSucceeded {
        user,
        token: token.into(),
    })
}

pub fn login_failed(message: impl Into<String>) -> RootAction {
    RootAction::Auth(AuthAction::LoginFailed {
        message: message.into(),
    })
}

pub fn token_refreshed(token: impl Into<String>) -> RootAction {
    RootAction::Auth(AuthAction::TokenRefreshed {
        token: token.into(),
    })
}

pub fn logout() -> RootAction {
    RootAction::Auth(AuthAction::Logout)
}
