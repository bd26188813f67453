//! Tera rendering engine: [`TemplateEngine`] and [`Renderer`].
//!
//! Templates use tera's Jinja2-compatible syntax, so the placeholder is
//! `{{ num_workers }}`. Autoescaping is switched off for every template name;
//! the output is YAML, not HTML, and must match the template byte-for-byte
//! outside the placeholder.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tera::Tera;

use workforge_core::WorkerCount;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().replace('\\', "/"))
}

fn read_template(path: &Path) -> Result<String, RenderError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RenderError::TemplateNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(io_err(path, e)),
    }
}

fn build_tera(name: &str, source: &str) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(name, source)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// A single compiled template.
pub struct TemplateEngine {
    tera: Tera,
    name: String,
}

impl TemplateEngine {
    /// Load and compile the template at `path`.
    ///
    /// A missing file is reported as [`RenderError::TemplateNotFound`]; any
    /// other read failure as [`RenderError::Io`].
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = read_template(path)?;
        let name = template_name(path);
        tracing::debug!("loaded template {} ({} bytes)", path.display(), source.len());
        Self::from_source(&name, &source)
    }

    /// Compile in-memory template text registered under `name`.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let tera = build_tera(name, source)?;
        Ok(TemplateEngine { tera, name: name.to_string() })
    }

    /// Name the template is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let rendered = self.tera.render(&self.name, &tera_ctx)?;
        tracing::debug!(
            "rendered {} with num_workers={} ({} bytes)",
            self.name,
            ctx.num_workers,
            rendered.len()
        );
        Ok(rendered)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders a deployment template for a given worker count.
///
/// Create once with [`Renderer::from_file`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::from_file(path)? })
    }

    pub fn from_engine(engine: TemplateEngine) -> Self {
        Renderer { engine }
    }

    /// Render the template with `num_workers` bound to `count`.
    pub fn render(&self, count: &WorkerCount) -> Result<String, RenderError> {
        self.engine.render(&TemplateContext::new(count.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
