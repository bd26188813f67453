//! workforge: render a docker-compose file for a given worker count.
//!
//! # Usage
//!
//! ```text
//! workforge <num_workers> [--template <PATH>] [--output <PATH>] [--dry-run | --diff]
//! ```
//!
//! Reads `docker-compose.yml.j2` from the working directory and writes
//! `docker-compose.yml` next to it.

mod render;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};

use render::RenderArgs;

/// Printed to stdout on any argument error; the process then exits with 1.
const USAGE: &str = "Usage: workforge <num_workers>";

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "workforge",
    version,
    about = "Render docker-compose.yml from docker-compose.yml.j2 for a worker count",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_tracing();
    cli.render.run()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
