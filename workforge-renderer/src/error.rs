//! Error types for workforge-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file does not exist.
    #[error("template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// Filesystem error while reading the template.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// Tera template engine error (syntax, undefined variable, or context
    /// serialization).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
