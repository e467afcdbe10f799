//! Claude Launcher - run Claude Code only from allowed directories.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging.
//! - Run the invocation and exit with a structured code.
//!
//! Does NOT handle:
//! - Configuration resolution (see `crates/config`).
//! - Directory containment (see `crates/gate`).
//!
//! Invariants:
//! - No `.env` file is loaded; only the real process environment is consulted.
//! - Diagnostics go to stderr and stay silent unless `RUST_LOG` is set.
//! - The launched tool's exit code becomes the launcher's exit code.

mod args;
mod dispatch;
mod error;
mod interactive;
mod launcher;
mod printer;

use args::Cli;
use clap::Parser;
use error::ExitCodeExt;
use printer::Printer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match dispatch::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "Invocation failed");
            dispatch::report_error(&mut Printer::new(std::io::stderr()), &e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
