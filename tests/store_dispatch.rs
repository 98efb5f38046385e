mod common;

use std::sync::Arc;

use common::{memory_store, sample_user};
use frontstate::config::BuildMode;
use frontstate::root::{combine, Action, RootAction, RootState};
use frontstate::slices::app::{hide_toast, set_loading, show_toast, Severity, ToastState};
use frontstate::slices::auth::{login_started, login_succeeded, logout, token_refreshed, AuthStatus};
use frontstate::slices::error::ErrorKind;
use serde_json::json;

#[test]
fn initial_toast_is_hidden_info() {
    let store = memory_store(BuildMode::Production);
    let toast = &store.get_state().app.toast;
    assert_eq!(
        *toast,
        ToastState {
            open: false,
            message: String::new(),
            severity: Severity::Info,
        }
    );
}

#[test]
fn show_then_hide_keeps_message() {
    let store = memory_store(BuildMode::Production);

    let state = store.dispatch(show_toast("Saved", Severity::Success));
    assert_eq!(
        state.app.toast,
        ToastState {
            open: true,
            message: "Saved".to_string(),
            severity: Severity::Success,
        }
    );

    let state = store.dispatch(hide_toast());
    assert_eq!(
        state.app.toast,
        ToastState {
            open: false,
            message: "Saved".to_string(),
            severity: Severity::Success,
        }
    );
}

#[test]
fn hide_is_idempotent() {
    let store = memory_store(BuildMode::Production);
    store.dispatch(show_toast("Saved", Severity::Success));
    store.dispatch(hide_toast());
    let hidden = store.get_state();
    let again = store.dispatch(hide_toast());

    assert!(!again.app.toast.open);
    assert!(Arc::ptr_eq(&hidden, &again));
    assert!(again.error.is_empty());
}

#[test]
fn unrecognized_action_keeps_snapshot_identity() {
    let store = memory_store(BuildMode::Production);
    let before = store.get_state();

    let after = store.dispatch_wire(Action::with_payload("marketing/track", json!({"page": "pricing"})));

    assert!(Arc::ptr_eq(&before, &after));
    assert!(Arc::ptr_eq(&before, &store.get_state()));
}

#[test]
fn no_op_action_keeps_snapshot_identity() {
    let store = memory_store(BuildMode::Production);
    let before = store.get_state();
    let after = store.dispatch(set_loading(false));
    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn changed_slice_leaves_others_shared() {
    let store = memory_store(BuildMode::Production);
    let before = store.get_state();
    let after = store.dispatch(set_loading(true));

    assert!(!Arc::ptr_eq(&before.app, &after.app));
    assert!(Arc::ptr_eq(&before.auth, &after.auth));
    assert!(Arc::ptr_eq(&before.error, &after.error));
}

#[test]
fn malformed_show_is_reported_without_touching_other_slices() {
    let store = memory_store(BuildMode::Production);
    store.dispatch(login_succeeded(sample_user(), "tok-1"));
    let before = store.get_state();

    let after = store.dispatch_wire(Action::with_payload(
        "app/showToast",
        json!({"message": "", "severity": "error"}),
    ));

    let entry = after.error.last().expect("error recorded");
    assert_eq!(entry.kind, ErrorKind::Transition);
    assert_eq!(entry.source, "app/showToast");
    assert!(Arc::ptr_eq(&before.app, &after.app));
    assert!(Arc::ptr_eq(&before.auth, &after.auth));
}

#[test]
fn undecodable_payload_is_reported_as_action_error() {
    let store = memory_store(BuildMode::Production);
    let before = store.get_state();

    let after = store.dispatch_wire(Action::with_payload("app/setLoading", json!("yes")));

    let entry = after.error.last().expect("error recorded");
    assert_eq!(entry.kind, ErrorKind::Action);
    assert_eq!(entry.source, "app/setLoading");
    assert_eq!(before.app, after.app);
}

#[test]
fn invalid_state_transition_is_reported() {
    let store = memory_store(BuildMode::Production);
    let after = store.dispatch(token_refreshed("tok-2"));

    assert_eq!(after.auth.status, AuthStatus::Idle);
    assert_eq!(after.error.last().map(|e| e.kind), Some(ErrorKind::Transition));
}

#[test]
fn wire_actions_match_typed_actions() {
    let typed = memory_store(BuildMode::Production);
    let wire = memory_store(BuildMode::Production);

    typed.dispatch(show_toast("Welcome", Severity::Info));
    wire.dispatch_wire(Action::with_payload("app/showToast", json!({"message": "Welcome"})));

    assert_eq!(typed.get_state().app, wire.get_state().app);
}

#[test]
fn replaying_actions_is_deterministic() {
    let actions: Vec<RootAction> = vec![
        login_started(),
        login_succeeded(sample_user(), "tok-1"),
        show_toast("Signed in", Severity::Success),
        token_refreshed("tok-2"),
        hide_toast(),
        logout(),
        token_refreshed("tok-3"),
    ];

    let run = || {
        let store = memory_store(BuildMode::Production);
        for action in actions.iter().cloned() {
            store.dispatch(action);
        }
        store.get_state()
    };

    let first = run();
    let second = run();
    assert_eq!(*first, *second);

    let mut replay = Arc::new(RootState::default());
    for action in &actions {
        if let Ok(next) = combine(&replay, action) {
            replay = next;
        }
    }
    assert_eq!(replay.app, first.app);
    assert_eq!(replay.auth, first.auth);
}

#[test]
fn concurrent_dispatches_are_all_applied() {
    let store = Arc::new(memory_store(BuildMode::Production));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for j in 0..10 {
                    store.dispatch(show_toast(format!("t{i}-{j}"), Severity::Info));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = store.get_state();
    assert!(state.app.toast.open);
    assert!(state.error.is_empty());
}
