// crates/schedura-lib/src/error.rs

//! Central error type.
use thiserror::Error;

use crate::validation::FieldErrors;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Submit failed: {0}")]
    Submit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VAL_001",
            AppError::InvalidInput(_) => "VAL_002",
            AppError::Storage(_) => "STORE_001",
            AppError::Submit(_) => "SUBMIT_001",
            AppError::Config(_) => "CFG_001",
            AppError::TaskNotFound(_) => "TASK_001",
            AppError::Internal(_) => "INT_001",
            AppError::Io(_) => "IO_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a sanitized message suitable for an alert dialog
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Please fix the highlighted fields".to_string(),
            AppError::InvalidInput(_) => "Invalid input provided".to_string(),
            AppError::TaskNotFound(_) => "Task not found".to_string(),
            AppError::Config(_) => "The app is misconfigured".to_string(),
            AppError::Storage(_)
            | AppError::Submit(_)
            | AppError::Internal(_)
            | AppError::Io(_)
            | AppError::Json(_) => "Something went wrong, please try again".to_string(),
        }
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
