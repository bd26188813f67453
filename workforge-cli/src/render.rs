//! `workforge <num_workers>`: render the template and write the output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use workforge_core::{paths, RenderPaths};
use workforge_sync::{pipeline, RenderJob, RenderMode, RenderOutcome, WriteResult};

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Number of worker replicas substituted for `num_workers`.
    ///
    /// Dash-prefixed tokens such as `-3` land here and fail to parse, rather
    /// than being read as unknown flags.
    #[arg(value_name = "NUM_WORKERS", allow_hyphen_values = true)]
    pub num_workers: String,

    /// Template to read.
    #[arg(long, short = 't', value_name = "PATH", default_value = paths::TEMPLATE_FILE)]
    pub template: PathBuf,

    /// File to overwrite with the rendered template.
    #[arg(long, short = 'o', value_name = "PATH", default_value = paths::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Show what would be written without actually writing any files.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Print a unified diff against the current output instead of writing.
    #[arg(long)]
    pub diff: bool,
}

impl RenderArgs {
    fn mode(&self) -> RenderMode {
        if self.diff {
            RenderMode::Diff
        } else if self.dry_run {
            RenderMode::DryRun
        } else {
            RenderMode::Write
        }
    }

    pub fn run(self) -> Result<()> {
        let mode = self.mode();
        let job = RenderJob::parse(
            &self.num_workers,
            RenderPaths::new(self.template, self.output),
            mode,
        )
        .context("cannot use <num_workers> argument")?;

        let outcome = pipeline::run(&job).with_context(|| {
            format!(
                "failed to render '{}' into '{}'",
                job.paths.template.display(),
                job.paths.output.display()
            )
        })?;

        match outcome {
            RenderOutcome::Write(result) => print_result(&result, mode),
            RenderOutcome::Diff(Some(diff)) => {
                print!("{diff}");
                if !diff.ends_with('\n') {
                    println!();
                }
            }
            RenderOutcome::Diff(None) => {}
        }
        Ok(())
    }
}

/// Plain runs stay silent on stdout; dry runs report what they would do.
fn print_result(result: &WriteResult, mode: RenderMode) {
    if mode != RenderMode::DryRun {
        return;
    }
    match result {
        WriteResult::WouldWrite { path } => println!("would write: {}", path.display()),
        WriteResult::Unchanged { path } => println!("unchanged: {}", path.display()),
        WriteResult::Written { path } => println!("wrote: {}", path.display()),
    }
}
