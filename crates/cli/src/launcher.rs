//! Launching Claude Code as a child process.
//!
//! Responsibilities:
//! - Build the child command line and environment.
//! - Run the child with inherited stdio and report how it exited.
//!
//! Invariants:
//! - `--continue` always precedes passthrough arguments.
//! - `CLAUDE_CONFIG_DIR` is only set when a profile directory was resolved;
//!   otherwise the inherited environment is left untouched.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use launcher_config::constants::PROFILE_DIR_ENV;
use thiserror::Error;

use crate::error::ExitCode;

/// Failure to start the child process.
#[derive(Error, Debug)]
#[error("Failed to launch {}: {source}", .program.to_string_lossy())]
pub struct LaunchError {
    program: OsString,
    source: std::io::Error,
}

/// How to run the tool for this invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub continue_session: bool,
    pub args: Vec<String>,
    pub profile_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    program: OsString,
}

impl Launcher {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn build_command(&self, options: &LaunchOptions) -> Command {
        let mut command = Command::new(&self.program);
        if options.continue_session {
            command.arg("--continue");
        }
        command.args(&options.args);
        if let Some(dir) = &options.profile_dir {
            command.env(PROFILE_DIR_ENV, dir);
        }
        command
    }

    /// Run the tool to completion and return the exit code to propagate.
    pub fn launch(&self, options: &LaunchOptions) -> Result<i32, LaunchError> {
        tracing::info!(
            program = %self.program.to_string_lossy(),
            continue_session = options.continue_session,
            args = options.args.len(),
            "Launching"
        );

        let status = self
            .build_command(options)
            .status()
            .map_err(|source| LaunchError {
                program: self.program.clone(),
                source,
            })?;

        let code = exit_code_of(status);
        tracing::debug!(code, "Child exited");
        Ok(code)
    }
}

/// Exit code to propagate, using `128 + signal` for signal deaths on Unix.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}
