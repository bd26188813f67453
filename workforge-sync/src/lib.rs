//! # workforge-sync
//!
//! Output writer, diff preview and the render pipeline.
//!
//! Call [`pipeline::run`] with a [`pipeline::RenderJob`] to render the
//! template and write (or diff) the output file.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::diff_output;
pub use error::SyncError;
pub use pipeline::{RenderJob, RenderMode, RenderOutcome};
pub use writer::{write_output, WriteResult};
