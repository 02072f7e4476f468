// ==============================
// tests/unit/validation_tests.rs
// ==============================
//! Rule catalog behaviour as seen from outside the crate
use crate::test_utils::form_values;
use schedura_common::FormKind;
use schedura_lib::validation::{
    rules::{CONFIRM_PASSWORD, EMAIL, FULL_NAME, PASSWORD},
    validate, RegistrationPolicy,
};

#[test]
fn test_well_formed_login_is_valid() {
    let cases = [
        ("user@test.com", "secret1"),
        ("a@b.co", "abcdef"),
        ("first.last+tag@mail.example.org", "a much longer password"),
    ];

    for (email, password) in cases {
        let errors = validate(
            FormKind::Login,
            RegistrationPolicy::Strict,
            &form_values(&[(EMAIL, email), (PASSWORD, password)]),
        );
        assert!(errors.is_empty(), "{email} / {password}: {errors}");
    }
}

#[test]
fn test_empty_login_reports_required_messages() {
    let errors = validate(
        FormKind::Login,
        RegistrationPolicy::Strict,
        &form_values(&[(EMAIL, ""), (PASSWORD, "")]),
    );

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(EMAIL), Some("Email is required"));
    assert_eq!(errors.get(PASSWORD), Some("Password is required"));
}

#[test]
fn test_not_an_email_reports_email_only() {
    let errors = validate(
        FormKind::Login,
        RegistrationPolicy::Strict,
        &form_values(&[(EMAIL, "not-an-email"), (PASSWORD, "abcdef")]),
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(EMAIL), Some("Invalid email"));
}

#[test]
fn test_missing_keys_validate_as_empty() {
    let errors = validate(
        FormKind::Login,
        RegistrationPolicy::Strict,
        &form_values(&[(EMAIL, "user@test.com")]),
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(PASSWORD), Some("Password is required"));
}

#[test]
fn test_validate_is_idempotent() {
    let input = form_values(&[(FULL_NAME, ""), (EMAIL, "x@"), (PASSWORD, "abc12345")]);

    let first = validate(FormKind::Register, RegistrationPolicy::Strict, &input);
    let second = validate(FormKind::Register, RegistrationPolicy::Strict, &input);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_strict_password_reports_uppercase_before_special() {
    let errors = validate(
        FormKind::Register,
        RegistrationPolicy::Strict,
        &form_values(&[
            (FULL_NAME, "Jane Doe"),
            (EMAIL, "jane@test.com"),
            (PASSWORD, "abc12345"),
        ]),
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(PASSWORD), Some("At least one uppercase letter"));
}

#[test]
fn test_basic_confirm_password_tracks_current_password() {
    let mut input = form_values(&[
        (FULL_NAME, "Jane Doe"),
        (EMAIL, "jane@test.com"),
        (PASSWORD, "secret1"),
        (CONFIRM_PASSWORD, "secret1"),
    ]);
    assert!(validate(FormKind::Register, RegistrationPolicy::Basic, &input).is_empty());

    input.set(PASSWORD, "secret2");
    let errors = validate(FormKind::Register, RegistrationPolicy::Basic, &input);
    assert_eq!(errors.get(CONFIRM_PASSWORD), Some("Passwords must match"));
}
