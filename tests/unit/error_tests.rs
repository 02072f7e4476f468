// ========================
// tests/unit/error_tests.rs
// ========================
use schedura_lib::{config::Settings, error::AppError, validation::FieldErrors};
use std::io::{Error as IoError, ErrorKind};

#[test]
fn test_validation_error_exposes_field_errors() {
    let mut errors = FieldErrors::default();
    errors.insert("email", "Invalid email");

    let err = AppError::Validation(errors.clone());
    assert_eq!(err.field_errors(), Some(&errors));
    assert_eq!(err.error_code(), "VAL_001");
}

#[test]
fn test_malformed_config_becomes_config_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("schedura.toml");
    std::fs::write(&path, "splash_delay_ms = \"soon\"").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.error_code(), "CFG_001");
}

#[test]
fn test_sanitized_messages_hide_details() {
    let cases = [
        AppError::Submit("disk quota exceeded at /data".to_string()),
        AppError::Internal("panic in worker".to_string()),
        AppError::Io(IoError::new(ErrorKind::Other, "device busy")),
    ];

    for err in cases {
        let message = err.sanitized_message();
        assert_eq!(message, "Something went wrong, please try again");
    }
}
