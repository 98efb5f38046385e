//! Actions for the error slice.

use serde::{Deserialize, Serialize};

use super::state::ErrorKind;
use crate::root::RootAction;
use crate::slice::SliceAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ErrorAction {
    #[serde(rename = "error/report")]
    Report {
        kind: ErrorKind,
        source: String,
        message: String,
    },
    #[serde(rename = "error/dismiss")]
    Dismiss { id: u64 },
    #[serde(rename = "error/clear")]
    Clear,
}

impl ErrorAction {
    pub const TYPES: &'static [&'static str] = &["error/report", "error/dismiss", "error/clear"];
}

impl SliceAction for ErrorAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::Report { .. } => "error/report",
            Self::Dismiss { .. } => "error/dismiss",
            Self::Clear => "error/clear",
        }
    }
}

pub fn report_error(
    kind: ErrorKind,
    source: impl Into<String>,
    message: impl Into<String>,
) -> RootAction {
    RootAction::Error(ErrorAction::Report {
        kind,
        source: source.into(),
        message: message.into(),
    })
}

pub fn dismiss_error(id: u64) -> RootAction {
    RootAction::Error(ErrorAction::Dismiss { id })
}

pub fn clear_errors() -> RootAction {
    RootAction::Error(ErrorAction::Clear)
}
