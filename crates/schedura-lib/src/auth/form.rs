// ============================
// crates/schedura-lib/src/auth/form.rs
// ============================
//! In-memory state of one login or registration form.
use schedura_common::FormKind;

use crate::auth::AuthService;
use crate::error::AppError;
use crate::validation::{FieldErrors, FormSchema, FormValues};

/// Field values and the latest validation result of a mounted form
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<&'static str>,
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    /// Every declared field starts out as an empty string
    pub fn new(schema: &FormSchema) -> Self {
        let fields: Vec<&'static str> = schema.field_names().collect();
        let mut form = Self {
            kind: schema.kind,
            fields,
            values: FormValues::new(),
            errors: FieldErrors::default(),
        };
        form.reset_values();
        form
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors of the last validation or submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Recompute errors from scratch; true when the form is valid
    pub fn validate<A: AuthService + ?Sized>(&mut self, auth: &A) -> bool {
        self.errors = auth.validate(self.kind, &self.values);
        self.errors.is_empty()
    }

    /// Submit through `auth`.
    ///
    /// Success wipes the values. A validation failure records the errors; any
    /// other failure leaves values and errors untouched so the user can retry.
    pub async fn submit<A: AuthService + ?Sized>(&mut self, auth: &A) -> Result<(), AppError> {
        match auth.submit(self.kind, &self.values).await {
            Ok(()) => {
                self.values.clear();
                self.reset_values();
                self.errors = FieldErrors::default();
                Ok(())
            },
            Err(AppError::Validation(errors)) => {
                self.errors = errors.clone();
                Err(AppError::Validation(errors))
            },
            Err(err) => Err(err),
        }
    }

    fn reset_values(&mut self) {
        for field in &self.fields {
            self.values.set(*field, "");
        }
    }
}
