//! Error types for the directory gate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while evaluating a candidate directory.
#[derive(Error, Debug)]
pub enum GateError {
    /// The candidate could not be turned into an absolute path.
    #[error("Failed to resolve {}: {source}", .path.display())]
    Resolution {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The candidate resolved but lies outside every allowed directory.
    #[error("Access denied: {} is not inside any allowed directory", .candidate.display())]
    AccessDenied {
        /// Resolved candidate directory.
        candidate: PathBuf,
        /// Resolved allow-list entries that were compared against.
        allow_list: Vec<PathBuf>,
        /// Configured entries skipped because they do not exist.
        skipped: Vec<PathBuf>,
    },
}
