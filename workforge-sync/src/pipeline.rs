//! Render pipeline entrypoint used by the CLI.
//!
//! Parse the worker count, load the template, render, then write or diff.
//! The count is parsed before any file is touched, so a bad argument never
//! reaches the filesystem.

use workforge_core::{RenderPaths, WorkerCount};
use workforge_renderer::Renderer;

use crate::{diff::diff_rendered, write_output, SyncError, WriteResult};

/// What to do with the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Replace the output file.
    #[default]
    Write,
    /// Report what would be written without touching the filesystem.
    DryRun,
    /// Produce a unified diff against the current output file.
    Diff,
}

/// A single render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub paths: RenderPaths,
    pub count: WorkerCount,
    pub mode: RenderMode,
}

impl RenderJob {
    /// Build a job from the raw worker-count argument.
    pub fn parse(raw_count: &str, paths: RenderPaths, mode: RenderMode) -> Result<Self, SyncError> {
        let count = raw_count.parse::<WorkerCount>()?;
        Ok(Self { paths, count, mode })
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Write(WriteResult),
    /// `None` when the output is already current.
    Diff(Option<String>),
}

/// Run the pipeline for `job`.
pub fn run(job: &RenderJob) -> Result<RenderOutcome, SyncError> {
    let renderer = Renderer::from_file(&job.paths.template)?;
    let rendered = renderer.render(&job.count)?;

    match job.mode {
        RenderMode::Write => Ok(RenderOutcome::Write(write_output(
            &job.paths.output,
            &rendered,
            false,
        )?)),
        RenderMode::DryRun => Ok(RenderOutcome::Write(write_output(
            &job.paths.output,
            &rendered,
            true,
        )?)),
        RenderMode::Diff => Ok(RenderOutcome::Diff(diff_rendered(
            &job.paths.output,
            &rendered,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use workforge_core::CoreError;

    use super::*;

    fn paths_in(dir: &TempDir) -> RenderPaths {
        RenderPaths::new(
            dir.path().join("docker-compose.yml.j2"),
            dir.path().join("docker-compose.yml"),
        )
    }

    #[test]
    fn parse_rejects_non_integer_before_io() {
        let dir = TempDir::new().expect("tmp");
        let err = RenderJob::parse("abc", paths_in(&dir), RenderMode::Write).expect_err("bad count");
        assert!(matches!(err, SyncError::Core(CoreError::InvalidWorkerCount { .. })));
    }

    #[test]
    fn run_writes_rendered_output() {
        let dir = TempDir::new().expect("tmp");
        let paths = paths_in(&dir);
        fs::write(&paths.template, "workers: {{ num_workers }}\n").expect("template");

        let job = RenderJob::parse("4", paths.clone(), RenderMode::Write).expect("job");
        let outcome = run(&job).expect("run");

        assert_eq!(
            outcome,
            RenderOutcome::Write(WriteResult::Written { path: paths.output.clone() })
        );
        assert_eq!(fs::read_to_string(&paths.output).expect("read"), "workers: 4\n");
    }

    #[test]
    fn missing_template_leaves_output_untouched() {
        let dir = TempDir::new().expect("tmp");
        let paths = paths_in(&dir);
        fs::write(&paths.output, "previous").expect("output");

        let job = RenderJob::parse("2", paths.clone(), RenderMode::Write).expect("job");
        let err = run(&job).expect_err("missing template");

        assert!(matches!(err, SyncError::Render(_)));
        assert_eq!(fs::read_to_string(&paths.output).expect("read"), "previous");
    }

    #[test]
    fn dry_run_reports_would_write() {
        let dir = TempDir::new().expect("tmp");
        let paths = paths_in(&dir);
        fs::write(&paths.template, "n: {{ num_workers }}").expect("template");

        let job = RenderJob::parse("3", paths.clone(), RenderMode::DryRun).expect("job");
        let outcome = run(&job).expect("run");

        assert!(matches!(outcome, RenderOutcome::Write(WriteResult::WouldWrite { .. })));
        assert!(!paths.output.exists());
    }

    #[test]
    fn diff_mode_never_writes() {
        let dir = TempDir::new().expect("tmp");
        let paths = paths_in(&dir);
        fs::write(&paths.template, "n: {{ num_workers }}\n").expect("template");

        let job = RenderJob::parse("3", paths.clone(), RenderMode::Diff).expect("job");
        match run(&job).expect("run") {
            RenderOutcome::Diff(Some(diff)) => assert!(diff.contains("+n: 3")),
            other => panic!("expected a diff, got {other:?}"),
        }
        assert!(!paths.output.exists());
    }
}
