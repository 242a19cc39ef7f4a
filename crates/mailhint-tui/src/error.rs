//! Error types for the terminal adapter

use mailhint_completion::CompletionError;
use thiserror::Error;

/// Result type for terminal operations
pub type TuiResult<T> = Result<T, TuiError>;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal setup, drawing or event reading failed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}
