//! Error types for workforge-core.

use thiserror::Error;

/// Errors raised while building domain values from user input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The worker count argument is not a non-negative integer.
    #[error("invalid worker count '{input}': expected a non-negative integer")]
    InvalidWorkerCount { input: String },
}
