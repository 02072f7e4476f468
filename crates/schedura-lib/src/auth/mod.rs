// ============================
// schedura-lib/src/auth/mod.rs
// ============================
//! Session gate, form submission and logout.

pub mod form;
pub mod session;
pub mod token_generator;
mod service;
mod service_impl;

pub use form::FormState;
pub use service::{AuthService, LogoutOutcome};
pub use service_impl::DefaultAuth;
pub use session::{Clock, GateHandle, GatePhase, SessionGate, TokioClock, DEFAULT_SPLASH_DELAY};
