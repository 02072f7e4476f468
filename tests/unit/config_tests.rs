// ==========================
// tests/unit/config_tests.rs
// ==========================
//! Settings flowing into the wired-up application state
use std::time::Duration;

use crate::test_utils::setup_flat_file_state;
use schedura_common::FormKind;
use schedura_lib::{
    config::Settings,
    validation::{rules::CONFIRM_PASSWORD, RegistrationPolicy},
};

#[test]
fn test_app_state_uses_configured_delay() {
    let settings = Settings {
        splash_delay_ms: 3000,
        ..Settings::default()
    };
    let (state, _temp_dir) = setup_flat_file_state(settings);

    assert_eq!(state.gate.delay(), Duration::from_millis(3000));
}

#[test]
fn test_registration_form_follows_policy() {
    let (strict, _strict_dir) = setup_flat_file_state(Settings::default());
    let form = strict.form(FormKind::Register);
    assert!(!form.values().contains(CONFIRM_PASSWORD));

    let settings = Settings {
        registration_policy: RegistrationPolicy::Basic,
        ..Settings::default()
    };
    let (basic, _basic_dir) = setup_flat_file_state(settings);
    let form = basic.form(FormKind::Register);
    assert!(form.values().contains(CONFIRM_PASSWORD));
    assert_eq!(basic.auth.policy(), RegistrationPolicy::Basic);
}

#[test]
fn test_load_from_toml_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("schedura.toml");

    std::fs::write(
        &config_path,
        r#"
        data_dir = "custom_data"
        log_level = "debug"
        json_logs = true
        clear_marker_on_logout = true
        "#,
    )
    .unwrap();

    let settings = Settings::load_from(&config_path).unwrap();
    assert_eq!(settings.data_dir, std::path::PathBuf::from("custom_data"));
    assert_eq!(settings.log_level, "debug");
    assert!(settings.json_logs);
    assert!(settings.clear_marker_on_logout);
    assert_eq!(settings.splash_delay_ms, 2000);
}
