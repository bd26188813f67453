//! Error types for workforge-sync.

use std::path::PathBuf;

use thiserror::Error;

use workforge_core::CoreError;
use workforge_renderer::RenderError;

/// All errors that can arise while producing the output file.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The worker count could not be parsed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
