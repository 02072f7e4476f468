// ============================
// schedura-lib/src/logging.rs
// ============================
//! Tracing subscriber setup.
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::error::AppError;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(settings: &Settings) -> String {
    let level = settings.log_level.to_ascii_lowercase();
    format!("schedura={level},schedura_lib={level}")
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(settings: &Settings) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(settings)));

    let result = if settings.json_logs {
        fmt().json().with_env_filter(filter).try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| AppError::Internal(format!("failed to install tracing subscriber: {e}")))
}
