// ============================
// crates/schedura-lib/src/validation/rules.rs
// ============================
//! Rule catalog for the login and registration forms.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use schedura_common::FormKind;

use super::{FieldRules, FormSchema};

// Field names, as the rendering layer submits them
pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

// Common validation constants
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_BASIC_PASSWORD_LENGTH: usize = 6;
pub const MIN_STRICT_PASSWORD_LENGTH: usize = 8;
pub const MAX_STRICT_PASSWORD_LENGTH: usize = 20;

static UPPERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static SPECIAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!@#$%^&*]").unwrap());

/// Which registration rule set is in force.
///
/// Two incompatible sets exist; they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// 8..=20 characters with uppercase, digit and special character; no confirm field
    #[default]
    Strict,
    /// At least 6 characters plus a matching confirm-password field
    Basic,
}

static LOGIN_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(FormKind::Login)
        .field(
            FieldRules::new(EMAIL)
                .required("Email is required")
                .email("Invalid email"),
        )
        .field(
            FieldRules::new(PASSWORD)
                .required("Password is required")
                .min_length(MIN_LOGIN_PASSWORD_LENGTH, "Minimum 6 characters"),
        )
});

static STRICT_REGISTER_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(FormKind::Register)
        .field(FieldRules::new(FULL_NAME).required("Full name is required"))
        .field(
            FieldRules::new(EMAIL)
                .required("Email is required")
                .email("Enter a valid email"),
        )
        .field(
            FieldRules::new(PASSWORD)
                .required("Password is required")
                .min_length(MIN_STRICT_PASSWORD_LENGTH, "Minimum 8 characters")
                .max_length(MAX_STRICT_PASSWORD_LENGTH, "Maximum 20 characters")
                .matches(&UPPERCASE_REGEX, "At least one uppercase letter")
                .matches(&DIGIT_REGEX, "At least one number")
                .matches(&SPECIAL_REGEX, "At least one special character"),
        )
});

static BASIC_REGISTER_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(FormKind::Register)
        .field(FieldRules::new(FULL_NAME).required("Full name is required"))
        .field(
            FieldRules::new(EMAIL)
                .required("Email is required")
                .email("Invalid email"),
        )
        .field(
            FieldRules::new(PASSWORD)
                .required("Password is required")
                .min_length(MIN_BASIC_PASSWORD_LENGTH, "Minimum 6 characters"),
        )
        .field(
            FieldRules::new(CONFIRM_PASSWORD)
                .required("Please confirm your password")
                .equals_field(PASSWORD, "Passwords must match"),
        )
});

/// Rules for the login form
pub fn login_schema() -> &'static FormSchema {
    &LOGIN_SCHEMA
}

/// Rules for the registration form under `policy`
pub fn register_schema(policy: RegistrationPolicy) -> &'static FormSchema {
    match policy {
        RegistrationPolicy::Strict => &STRICT_REGISTER_SCHEMA,
        RegistrationPolicy::Basic => &BASIC_REGISTER_SCHEMA,
    }
}

/// Schema for a form; `policy` only affects registration
pub fn schema_for(kind: FormKind, policy: RegistrationPolicy) -> &'static FormSchema {
    match kind {
        FormKind::Login => login_schema(),
        FormKind::Register => register_schema(policy),
    }
}
