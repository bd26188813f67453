//! workforge core library: domain types and errors.
//!
//! - [`types`]: [`WorkerCount`], [`RenderPaths`] and the default file names
//! - [`error`]: [`CoreError`]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{paths, RenderPaths, WorkerCount};
