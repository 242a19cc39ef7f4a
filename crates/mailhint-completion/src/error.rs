//! Error types for suggestion configuration and session dispatch

use thiserror::Error;

use crate::types::FieldId;

/// Errors surfaced by the completion crate.
///
/// Matching and acceptance never fail; only configuration loading and
/// dispatching events to an unbound field produce errors.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No session bound to {0}")]
    SessionNotFound(FieldId),
}

pub type CompletionResult<T> = Result<T, CompletionError>;
