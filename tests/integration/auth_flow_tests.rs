// ==================================
// tests/integration/auth_flow_tests.rs
// ==================================
//! Validate → submit → marker → next process start
use std::time::Duration;

use crate::test_utils::{form_values, setup_flat_file_state, FailingStore};
use schedura_common::{
    AuthScreen, FormKind, NavigationRoot, SessionState, ShellTab, USER_TOKEN_KEY,
};
use schedura_lib::{
    auth::{AuthService, DefaultAuth, FormState, LogoutOutcome, SessionGate},
    config::Settings,
    error::AppError,
    storage::{KeyValueStore, MemoryStore},
    validation::rules::{login_schema, EMAIL, PASSWORD},
    AppState,
};

fn fast_settings() -> Settings {
    Settings {
        splash_delay_ms: 0,
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_login_then_restart_is_authenticated() {
    let store = MemoryStore::new();
    let auth = DefaultAuth::new(store.clone());

    let values = form_values(&[(EMAIL, "user@test.com"), (PASSWORD, "secret1")]);
    assert!(auth.validate(FormKind::Login, &values).is_empty());
    auth.login(&values).await.unwrap();

    // a new gate stands in for the next process start
    let gate = SessionGate::new(store, Duration::ZERO);
    assert_eq!(gate.resolve_session().await, SessionState::Authenticated);
}

#[tokio::test]
async fn test_gate_decision_is_stale_until_restart() {
    let (state, temp_dir) = setup_flat_file_state(fast_settings());

    assert_eq!(
        state.navigation_root().await,
        NavigationRoot::AuthFlow {
            initial: AuthScreen::Register
        }
    );

    let mut form = state.form(FormKind::Login);
    form.set(EMAIL, "user@test.com");
    form.set(PASSWORD, "secret1");
    form.submit(state.auth.as_ref()).await.unwrap();

    // same process: still the auth flow
    assert!(matches!(
        state.navigation_root().await,
        NavigationRoot::AuthFlow { .. }
    ));

    // restart on the same data directory
    let restarted = AppState::from_settings(Settings {
        data_dir: temp_dir.path().to_path_buf(),
        ..fast_settings()
    })
    .unwrap();
    assert_eq!(
        restarted.navigation_root().await,
        NavigationRoot::AppShell {
            initial: ShellTab::Home
        }
    );
}

#[tokio::test]
async fn test_storage_failure_on_submit_keeps_form_values() {
    let auth = DefaultAuth::new(FailingStore);
    let mut form = FormState::new(login_schema());
    form.set(EMAIL, "user@test.com");
    form.set(PASSWORD, "secret1");

    let err = form.submit(&auth).await.unwrap_err();

    assert!(matches!(err, AppError::Submit(_)));
    assert_eq!(err.sanitized_message(), "Something went wrong, please try again");
    assert_eq!(form.value(EMAIL), "user@test.com");
    assert_eq!(form.value(PASSWORD), "secret1");
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_default_logout_leaves_user_logged_in_after_restart() {
    let (state, temp_dir) = setup_flat_file_state(fast_settings());
    state
        .auth
        .login(&form_values(&[(EMAIL, "user@test.com"), (PASSWORD, "secret1")]))
        .await
        .unwrap();

    assert_eq!(state.auth.logout().await.unwrap(), LogoutOutcome::MarkerKept);

    let restarted = AppState::from_settings(Settings {
        data_dir: temp_dir.path().to_path_buf(),
        ..fast_settings()
    })
    .unwrap();
    assert_eq!(
        restarted.gate.resolve_session().await,
        SessionState::Authenticated
    );
}

#[tokio::test]
async fn test_clearing_logout_returns_to_auth_flow_after_restart() {
    let settings = Settings {
        clear_marker_on_logout: true,
        ..fast_settings()
    };
    let (state, temp_dir) = setup_flat_file_state(settings.clone());
    state
        .auth
        .login(&form_values(&[(EMAIL, "user@test.com"), (PASSWORD, "secret1")]))
        .await
        .unwrap();

    assert_eq!(state.auth.logout().await.unwrap(), LogoutOutcome::MarkerCleared);

    let store = schedura_lib::storage::FlatFileStore::new(temp_dir.path()).unwrap();
    assert_eq!(store.get(USER_TOKEN_KEY).await.unwrap(), None);

    let restarted = AppState::from_settings(Settings {
        data_dir: temp_dir.path().to_path_buf(),
        ..settings
    })
    .unwrap();
    assert_eq!(
        restarted.gate.resolve_session().await,
        SessionState::Unauthenticated
    );
}

#[tokio::test]
async fn test_rejected_registration_writes_nothing() {
    let store = MemoryStore::new();
    let auth = DefaultAuth::new(store.clone());

    let err = auth
        .submit(
            FormKind::Register,
            &form_values(&[
                ("fullName", "Jane Doe"),
                (EMAIL, "jane@test.com"),
                (PASSWORD, "abc12345"),
            ]),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors().and_then(|e| e.get(PASSWORD)),
        Some("At least one uppercase letter")
    );
    assert_eq!(store.get(USER_TOKEN_KEY).await.unwrap(), None);
}
