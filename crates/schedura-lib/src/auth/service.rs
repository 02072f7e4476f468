use async_trait::async_trait;
use schedura_common::FormKind;

use crate::error::AppError;
use crate::validation::{FieldErrors, FormValues};

/// What a logout did to the persisted marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Logged only; the marker is still in place
    MarkerKept,
    /// The marker was removed
    MarkerCleared,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Run the rules of `kind` without submitting
    fn validate(&self, kind: FormKind, values: &FormValues) -> FieldErrors;
    /// Validate, then write the session marker
    async fn login(&self, values: &FormValues) -> Result<(), AppError>;
    /// Validate, then write the session marker
    async fn register(&self, values: &FormValues) -> Result<(), AppError>;
    async fn logout(&self) -> Result<LogoutOutcome, AppError>;

    async fn submit(&self, kind: FormKind, values: &FormValues) -> Result<(), AppError> {
        match kind {
            FormKind::Login => self.login(values).await,
            FormKind::Register => self.register(values).await,
        }
    }
}
