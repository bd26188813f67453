//! # workforge-renderer
//!
//! Tera-based engine that renders a deployment template for a given worker
//! count.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use workforge_core::WorkerCount;
//! use workforge_renderer::Renderer;
//!
//! fn preview(template: &Path) {
//!     if let Ok(renderer) = Renderer::from_file(template) {
//!         if let Ok(out) = renderer.render(&WorkerCount::from(4)) {
//!             println!("{out}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
