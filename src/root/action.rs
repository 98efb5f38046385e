//! Root action and its wire form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ActionError;
use crate::slice::SliceAction;
use crate::slices::app::AppAction;
use crate::slices::auth::AuthAction;
use crate::slices::error::ErrorAction;

/// Untyped action as it crosses the boundary: `{ "type": ..., "payload"?: ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }
}

/// Every action the store can dispatch.
///
/// Known types are matched exhaustively per slice. A type no slice knows
/// is kept as `Unrecognized`; it passes through the pipeline and leaves
/// the snapshot untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RootAction {
    App(AppAction),
    Auth(AuthAction),
    Error(ErrorAction),
    Unrecognized {
        action_type: String,
        payload: Option<Value>,
    },
}

impl RootAction {
    pub fn action_type(&self) -> &str {
        match self {
            Self::App(action) => action.action_type(),
            Self::Auth(action) => action.action_type(),
            Self::Error(action) => action.action_type(),
            Self::Unrecognized { action_type, .. } => action_type,
        }
    }

    /// Decode a wire action.
    ///
    /// # Errors
    /// Returns `ActionError::InvalidPayload` if the type is known but its
    /// payload does not match the expected shape.
    pub fn from_wire(action: Action) -> Result<Self, ActionError> {
        let kind = action.kind.as_str();
        if AppAction::TYPES.contains(&kind) {
            decode(action).map(Self::App)
        } else if AuthAction::TYPES.contains(&kind) {
            decode(action).map(Self::Auth)
        } else if ErrorAction::TYPES.contains(&kind) {
            decode(action).map(Self::Error)
        } else {
            Ok(Self::Unrecognized {
                action_type: action.kind,
                payload: action.payload,
            })
        }
    }

    /// Encode into the wire form.
    pub fn to_wire(&self) -> Result<Action, ActionError> {
        match self {
            Self::App(action) => encode(action),
            Self::Auth(action) => encode(action),
            Self::Error(action) => encode(action),
            Self::Unrecognized {
                action_type,
                payload,
            } => Ok(Action {
                kind: action_type.clone(),
                payload: payload.clone(),
            }),
        }
    }

    /// Payload only, for diagnostics. `Value::Null` when there is none.
    pub fn payload_json(&self) -> Value {
        self.to_wire()
            .ok()
            .and_then(|wire| wire.payload)
            .unwrap_or(Value::Null)
    }
}

impl From<AppAction> for RootAction {
    fn from(action: AppAction) -> Self {
        Self::App(action)
    }
}

impl From<AuthAction> for RootAction {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<ErrorAction> for RootAction {
    fn from(action: ErrorAction) -> Self {
        Self::Error(action)
    }
}

fn decode<A: DeserializeOwned>(action: Action) -> Result<A, ActionError> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(action.kind.clone()));
    if let Some(payload) = action.payload.filter(|payload| !payload.is_null()) {
        object.insert("payload".to_string(), payload);
    }
    serde_json::from_value(Value::Object(object)).map_err(|source| ActionError::InvalidPayload {
        action_type: action.kind,
        source,
    })
}

fn encode<A: SliceAction + Serialize>(action: &A) -> Result<Action, ActionError> {
    let value = serde_json::to_value(action).map_err(|source| ActionError::Encode {
        action_type: action.action_type().to_string(),
        source,
    })?;
    let payload = match value {
        Value::Object(mut object) => object.remove("payload"),
        _ => None,
    };
    Ok(Action {
        kind: action.action_type().to_string(),
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::app::Severity;
    use serde_json::json;

    #[test]
    fn decodes_show_toast_with_default_severity() {
        let wire = Action::with_payload("app/showToast", json!({ "message": "Saved" }));
        let action = RootAction::from_wire(wire).unwrap();
        assert_eq!(
            action,
            RootAction::App(AppAction::ShowToast {
                message: "Saved".to_string(),
                severity: Severity::Info,
            })
        );
    }

    #[test]
    fn decodes_unit_action_with_null_payload() {
        let wire = Action::with_payload("app/hideToast", Value::Null);
        let action = RootAction::from_wire(wire).unwrap();
        assert_eq!(action, RootAction::App(AppAction::HideToast));
    }

    #[test]
    fn unknown_type_is_unrecognized() {
        let wire = Action::with_payload("router/navigate", json!({ "to": "/pricing" }));
        let action = RootAction::from_wire(wire).unwrap();
        assert_eq!(action.action_type(), "router/navigate");
        assert!(matches!(action, RootAction::Unrecognized { .. }));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let wire = Action::with_payload("auth/loginSucceeded", json!({ "token": 42 }));
        let err = RootAction::from_wire(wire).unwrap_err();
        assert!(matches!(
            err,
            ActionError::InvalidPayload { ref action_type, .. } if action_type == "auth/loginSucceeded"
        ));
    }

    #[test]
    fn wire_json_uses_type_key() {
        let wire = crate::slices::app::hide_toast().to_wire().unwrap();
        assert_eq!(
            serde_json::to_value(&wire).unwrap(),
            json!({ "type": "app/hideToast" })
        );
    }

    #[test]
    fn payload_is_exposed_for_diagnostics() {
        let action = crate::slices::app::set_loading(true);
        assert_eq!(action.payload_json(), json!(true));
        assert_eq!(crate::slices::app::hide_toast().payload_json(), Value::Null);
    }
}
