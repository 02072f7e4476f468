// ============================
// schedura-lib/src/lib.rs
// ============================
//! Core functionality of the `Schedura` task app: the startup session gate,
//! login/registration validation and the home screen task list.

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod storage;
pub mod tasks;
pub mod validation;

use std::sync::Arc;

use schedura_common::NavigationRoot;

use crate::auth::{DefaultAuth, FormState, SessionGate};
use crate::config::Settings;
use crate::storage::{FlatFileStore, KeyValueStore};
use crate::validation::schema_for;

pub use schedura_common as common;

/// Application state shared by the rendering layer's entry points
pub struct AppState<S> {
    /// Form submission and logout
    pub auth: Arc<DefaultAuth<S>>,
    /// Startup decision, resolved once
    pub gate: Arc<SessionGate<S>>,
    /// Settings in force
    pub settings: Arc<Settings>,
}

impl<S> AppState<S>
where
    S: KeyValueStore + Clone + 'static,
{
    /// Wire the gate and the auth service to the same store
    pub fn new(store: S, settings: Settings) -> Self {
        let auth = DefaultAuth::new(store.clone())
            .with_policy(settings.registration_policy)
            .with_logout_clearing(settings.clear_marker_on_logout);
        let gate = SessionGate::new(store, settings.splash_delay());

        Self {
            auth: Arc::new(auth),
            gate: Arc::new(gate),
            settings: Arc::new(settings),
        }
    }

    /// Resolve the gate and map the outcome to a navigation root
    pub async fn navigation_root(&self) -> NavigationRoot {
        NavigationRoot::from(self.gate.resolve_session().await)
    }

    /// Fresh state for one of the two forms
    pub fn form(&self, kind: schedura_common::FormKind) -> FormState {
        FormState::new(schema_for(kind, self.settings.registration_policy))
    }
}

impl AppState<FlatFileStore> {
    /// State backed by the flat-file store under `settings.data_dir`
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let store = FlatFileStore::new(&settings.data_dir)?;
        Ok(Self::new(store, settings))
    }
}
