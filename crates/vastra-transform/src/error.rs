//! Error types for vastra-transform

use thiserror::Error;

/// Errors that can occur while resizing
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] vastra_core::Error),

    /// Invalid target size or cap
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
