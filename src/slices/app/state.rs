//! State for the application UI slice.

use serde::{Deserialize, Serialize};

use crate::slice::SliceState;

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Toast notification.
///
/// Two states: hidden (`open == false`) and visible. Hiding keeps the last
/// message and severity so the closing animation can still render them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToastState {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        self.open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Application UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub toast: ToastState,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl SliceState for AppState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toast_is_hidden_info() {
        let state = AppState::default();
        assert!(!state.toast.is_visible());
        assert_eq!(state.toast.message, "");
        assert_eq!(state.toast.severity, Severity::Info);
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }
}
