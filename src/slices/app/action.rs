//! Actions for the application UI slice.

use serde::{Deserialize, Serialize};

use super::state::{Severity, Theme};
use crate::root::RootAction;
use crate::slice::SliceAction;

/// Actions the app slice reacts to.
///
/// Serialized adjacently tagged, which is exactly the wire shape
/// `{ "type": "app/...", "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AppAction {
    #[serde(rename = "app/showToast")]
    ShowToast {
        message: String,
        #[serde(default)]
        severity: Severity,
    },
    #[serde(rename = "app/hideToast")]
    HideToast,
    #[serde(rename = "app/setLoading")]
    SetLoading(bool),
    #[serde(rename = "app/setTheme")]
    SetTheme(Theme),
}

impl AppAction {
    /// Every wire tag this slice recognizes.
    pub const TYPES: &'static [&'static str] = &[
        "app/showToast",
        "app/hideToast",
        "app/setLoading",
        "app/setTheme",
    ];
}

impl SliceAction for AppAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::ShowToast { .. } => "app/showToast",
            Self::HideToast => "app/hideToast",
            Self::SetLoading(_) => "app/setLoading",
            Self::SetTheme(_) => "app/setTheme",
        }
    }
}

pub fn show_toast(message: impl Into<String>, severity: Severity) -> RootAction {
    RootAction::App(AppAction::ShowToast {
        message: message.into(),
        severity,
    })
}

pub fn hide_toast() -> RootAction {
    RootAction::App(AppAction::HideToast)
}

pub fn set_loading(loading: bool) -> RootAction {
    RootAction::App(AppAction::SetLoading(loading))
}

pub fn set_theme(theme: Theme) -> RootAction {
    RootAction::App(AppAction::SetTheme(theme))
}
