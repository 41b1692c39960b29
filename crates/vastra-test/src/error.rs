//! Error types for the test helpers

use thiserror::Error;

/// Errors that can occur while building fixtures or writing debug output
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture dimensions or parameters were rejected
    #[error("invalid fixture: {0}")]
    Fixture(#[from] vastra_core::Error),

    /// Failed to encode a fixture
    #[error("failed to encode fixture: {message}")]
    Encode { message: String },

    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test helper operations
pub type TestResult<T> = Result<T, TestError>;
