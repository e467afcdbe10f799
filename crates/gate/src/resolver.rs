//! Path resolution against the filesystem.
//!
//! Responsibilities:
//! - Turn a possibly relative path into a canonical absolute one.
//! - Report whether a path currently exists.
//!
//! Does NOT handle:
//! - Comparing paths (see clean.rs).
//!
//! Invariants:
//! - `resolve` only fails when the path cannot be made absolute.
//! - An empty path never exists.
//! - When canonicalization fails (typically because a component does not
//!   exist yet), the cleaned absolute path is returned instead.
//! - Every successful result is cleaned, so `resolve` is idempotent.

use std::path::{Path, PathBuf};

use crate::clean::clean_path;
use crate::error::GateError;

/// Canonicalizes paths for the gate.
#[cfg_attr(test, mockall::automock)]
pub trait PathResolver {
    /// Canonical absolute form of `path`, following symlinks where possible.
    fn resolve(&self, path: &Path) -> Result<PathBuf, GateError>;

    /// Whether `path` names something that exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;
}

/// Resolver backed by `std::fs`.
///
/// Relative paths are anchored at the base directory if one is set, and at
/// the process working directory otherwise.
#[derive(Debug, Clone, Default)]
pub struct FsResolver {
    base_dir: Option<PathBuf>,
}

impl FsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor relative paths at `base_dir` instead of the working directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn absolutize(&self, path: &Path) -> Result<PathBuf, GateError> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let base = match &self.base_dir {
            Some(base) => base.clone(),
            None => std::env::current_dir().map_err(|source| GateError::Resolution {
                path: path.to_path_buf(),
                source,
            })?,
        };
        Ok(base.join(path))
    }
}

impl PathResolver for FsResolver {
    fn resolve(&self, path: &Path) -> Result<PathBuf, GateError> {
        let absolute = clean_path(&self.absolutize(path)?);

        match std::fs::canonicalize(&absolute) {
            Ok(canonical) => Ok(clean_path(&canonical)),
            Err(e) => {
                tracing::debug!(
                    path = %absolute.display(),
                    error = %e,
                    "Canonicalization failed, using absolute path"
                );
                Ok(absolute)
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        // An empty path names nothing, even though it absolutizes to the base.
        if path.as_os_str().is_empty() {
            return false;
        }
        self.absolutize(path)
            .map(|absolute| absolute.exists())
            .unwrap_or(false)
    }
}
