//! Unified diff support for `workforge --diff`.

use std::io::ErrorKind;
use std::path::Path;

use similar::TextDiff;

use workforge_core::{RenderPaths, WorkerCount};
use workforge_renderer::Renderer;

use crate::{error::io_err, SyncError};

/// Render the template and compare it to the current output file.
///
/// Returns `None` when the output is already up to date. No files are written.
pub fn diff_output(paths: &RenderPaths, count: &WorkerCount) -> Result<Option<String>, SyncError> {
    let renderer = Renderer::from_file(&paths.template)?;
    let rendered = renderer.render(count)?;
    diff_rendered(&paths.output, &rendered)
}

/// Diff already-rendered content against `output`.
pub fn diff_rendered(output: &Path, rendered: &str) -> Result<Option<String>, SyncError> {
    let existing = read_existing_or_empty(output)?;
    if existing == rendered {
        return Ok(None);
    }

    let old_header = format!("a/{}", output.display());
    let new_header = format!("b/{}", output.display());
    let unified = TextDiff::from_lines(existing.as_str(), rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();
    Ok(Some(unified))
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
