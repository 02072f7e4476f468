use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info, warn};

use schedura_common::{FormKind, USER_TOKEN_KEY};

use crate::auth::token_generator::generate_session_marker;
use crate::auth::{AuthService, LogoutOutcome};
use crate::error::AppError;
use crate::metrics::{FORM_REJECTED, LOGOUT, SUBMIT_ACCEPTED, SUBMIT_FAILED};
use crate::storage::KeyValueStore;
use crate::validation::{schema_for, FieldErrors, FormValues, RegistrationPolicy};

pub struct DefaultAuth<S> {
    store: S,
    policy: RegistrationPolicy,
    clear_marker_on_logout: bool,
}

impl<S: KeyValueStore> DefaultAuth<S> {
    /// Strict registration rules, logout keeps the marker
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: RegistrationPolicy::default(),
            clear_marker_on_logout: false,
        }
    }

    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_logout_clearing(mut self, clear: bool) -> Self {
        self.clear_marker_on_logout = clear;
        self
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn submit_checked(&self, kind: FormKind, values: &FormValues) -> Result<(), AppError> {
        let errors = self.validate(kind, values);
        if !errors.is_empty() {
            counter!(FORM_REJECTED, "form" => form_label(kind)).increment(1);
            debug!(form = form_label(kind), %errors, "submit blocked by validation");
            return Err(AppError::Validation(errors));
        }

        let marker = generate_session_marker();
        if let Err(err) = self.store.set(USER_TOKEN_KEY, &marker).await {
            counter!(SUBMIT_FAILED, "form" => form_label(kind)).increment(1);
            warn!(form = form_label(kind), error = %err, "session marker write failed");
            return Err(AppError::Submit(err.to_string()));
        }

        counter!(SUBMIT_ACCEPTED, "form" => form_label(kind)).increment(1);
        info!(form = form_label(kind), "submit accepted, session marker written");
        Ok(())
    }
}

#[async_trait]
impl<S: KeyValueStore> AuthService for DefaultAuth<S> {
    fn validate(&self, kind: FormKind, values: &FormValues) -> FieldErrors {
        schema_for(kind, self.policy).validate(values)
    }

    async fn login(&self, values: &FormValues) -> Result<(), AppError> {
        self.submit_checked(FormKind::Login, values).await
    }

    async fn register(&self, values: &FormValues) -> Result<(), AppError> {
        self.submit_checked(FormKind::Register, values).await
    }

    async fn logout(&self) -> Result<LogoutOutcome, AppError> {
        counter!(LOGOUT).increment(1);

        if !self.clear_marker_on_logout {
            // Observed logout handlers only log; clearing is opt-in
            info!("logout pressed, session marker left in place");
            return Ok(LogoutOutcome::MarkerKept);
        }

        self.store.remove(USER_TOKEN_KEY).await?;
        info!("logout, session marker cleared");
        Ok(LogoutOutcome::MarkerCleared)
    }
}

fn form_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "login",
        FormKind::Register => "register",
    }
}
