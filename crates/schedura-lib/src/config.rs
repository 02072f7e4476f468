// ============================
// schedura-lib/src/config.rs
// ============================
//! Configuration management.
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::RegistrationPolicy;


/// Default config file names, looked up in the working directory
pub const CONFIG_TOML: &str = "schedura.toml";
pub const CONFIG_JSON: &str = "schedura.json";
/// Prefix of environment overrides, e.g. `SCHEDURA_LOG_LEVEL`
pub const ENV_PREFIX: &str = "SCHEDURA_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the persisted key/value file
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Splash delay before the session gate may resolve, in milliseconds
    pub splash_delay_ms: u64,
    /// Registration rule set in force
    pub registration_policy: RegistrationPolicy,
    /// Remove the session marker on logout instead of only logging
    pub clear_marker_on_logout: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            json_logs: false,
            splash_delay_ms: 2000,
            registration_policy: RegistrationPolicy::Strict,
            clear_marker_on_logout: false,
        }
    }
}

impl Settings {
    /// Defaults, then `schedura.toml`, then `schedura.json`, then `SCHEDURA_*`
    pub fn load() -> Result<Self, AppError> {
        let figment = Self::base()
            .merge(Toml::file(CONFIG_TOML))
            .merge(Json::file(CONFIG_JSON))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::from_figment(figment)
    }

    /// Defaults, then the given file (TOML or JSON by extension), then `SCHEDURA_*`
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let figment = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::base().merge(Json::file(path)),
            _ => Self::base().merge(Toml::file(path)),
        };
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract and validate settings from any figment
    pub fn from_figment(figment: Figment) -> Result<Self, AppError> {
        let settings: Settings = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Config(format!(
                "invalid log level '{}'",
                self.log_level
            )));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("data_dir must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}
