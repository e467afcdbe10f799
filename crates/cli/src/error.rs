//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration, gate, selection and launch errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (see `printer` and anyhow Display).
//! - The launched tool's own exit status, which is passed through unchanged.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for an interrupted prompt (Unix standard: 128 + SIGINT).

use launcher_config::{ConfigError, SelectionError};
use launcher_gate::GateError;

use crate::launcher::LaunchError;

/// Structured exit codes for claude-launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the requested action completed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// No allowed directories could be loaded from any source.
    ///
    /// Users should set CLAUDE_SAFE_DIRS or create the config file.
    ConfigurationMissing = 2,

    /// The working directory is outside every allowed directory.
    AccessDenied = 3,

    /// The working directory could not be resolved to an absolute path.
    ResolutionFailed = 4,

    /// Interactive account selection failed (e.g. no terminal).
    SelectionFailed = 5,

    /// The tool could not be started.
    LaunchFailed = 6,

    /// Interrupted - a prompt was cancelled (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ConfigurationMissing { .. } => ExitCode::ConfigurationMissing,
            ConfigError::Selection(e) => ExitCode::from(e),
            ConfigError::AccountLookup(_) | ConfigError::ConfigDirUnavailable(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

impl From<&SelectionError> for ExitCode {
    fn from(err: &SelectionError) -> Self {
        match err {
            SelectionError::Cancelled => ExitCode::Interrupted,
            SelectionError::Unavailable(_) | SelectionError::OutOfRange { .. } => {
                ExitCode::SelectionFailed
            }
        }
    }
}

impl From<&GateError> for ExitCode {
    fn from(err: &GateError) -> Self {
        match err {
            GateError::Resolution { .. } => ExitCode::ResolutionFailed,
            GateError::AccessDenied { .. } => ExitCode::AccessDenied,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<GateError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<SelectionError>() {
                return ExitCode::from(e);
            }
            if cause.downcast_ref::<LaunchError>().is_some() {
                return ExitCode::LaunchFailed;
            }
        }

        ExitCode::GeneralError
    }
}
