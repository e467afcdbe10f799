//! Directory admission against an allow-list.
//!
//! Responsibilities:
//! - Resolve the candidate and every existing allow-list entry.
//! - Admit the candidate if it equals or lies below a resolved entry.
//! - Describe a denial with everything the caller needs to explain it.
//!
//! Does NOT handle:
//! - Loading the allow-list (see the config crate).
//! - Printing the outcome.
//!
//! Invariants:
//! - A resolved path is only ever compared with another resolved path.
//! - Entries that do not exist are skipped, never fatal. An empty entry never exists.
//! - Evaluation stops at the first matching entry.

use std::path::{Path, PathBuf};

use crate::clean::{is_same_path, is_strict_descendant};
use crate::error::GateError;
use crate::resolver::{FsResolver, PathResolver};

/// Outcome of evaluating one candidate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed {
        /// Resolved candidate.
        candidate: PathBuf,
        /// Resolved allow-list entry that admitted it.
        matched: PathBuf,
    },
    Denied {
        /// Resolved candidate.
        candidate: PathBuf,
        /// Resolved entries that exist, in configured order.
        allow_list: Vec<PathBuf>,
        /// Configured entries skipped because they do not exist.
        skipped: Vec<PathBuf>,
    },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed { .. })
    }

    /// The resolved candidate directory.
    pub fn candidate(&self) -> &Path {
        match self {
            Decision::Allowed { candidate, .. } | Decision::Denied { candidate, .. } => candidate,
        }
    }

    /// Convert a denial into `GateError::AccessDenied`.
    ///
    /// On success returns the resolved candidate.
    pub fn into_result(self) -> Result<PathBuf, GateError> {
        match self {
            Decision::Allowed { candidate, .. } => Ok(candidate),
            Decision::Denied {
                candidate,
                allow_list,
                skipped,
            } => Err(GateError::AccessDenied {
                candidate,
                allow_list,
                skipped,
            }),
        }
    }
}

/// One-shot containment check over a fixed allow-list.
#[derive(Debug, Clone)]
pub struct DirectoryGate<R = FsResolver> {
    allow_list: Vec<PathBuf>,
    resolver: R,
}

impl DirectoryGate<FsResolver> {
    /// Gate resolving paths against the real filesystem.
    pub fn new(allow_list: Vec<PathBuf>) -> Self {
        Self::with_resolver(allow_list, FsResolver::new())
    }
}

impl<R: PathResolver> DirectoryGate<R> {
    pub fn with_resolver(allow_list: Vec<PathBuf>, resolver: R) -> Self {
        Self {
            allow_list,
            resolver,
        }
    }

    /// Configured entries, unresolved.
    pub fn allow_list(&self) -> &[PathBuf] {
        &self.allow_list
    }

    /// Decide whether `candidate` may be used.
    ///
    /// # Errors
    ///
    /// Returns `GateError::Resolution` if the candidate cannot be made
    /// absolute. A denial is not an error here; see [`Decision::into_result`].
    pub fn evaluate(&self, candidate: &Path) -> Result<Decision, GateError> {
        let candidate = self.resolver.resolve(candidate)?;
        let mut resolved_entries = Vec::with_capacity(self.allow_list.len());
        let mut skipped = Vec::new();

        for entry in &self.allow_list {
            if entry.as_os_str().is_empty() || !self.resolver.exists(entry) {
                tracing::debug!(entry = %entry.display(), "Skipping nonexistent allowed directory");
                skipped.push(entry.clone());
                continue;
            }

            let resolved = match self.resolver.resolve(entry) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::debug!(entry = %entry.display(), error = %e, "Skipping unresolvable allowed directory");
                    skipped.push(entry.clone());
                    continue;
                }
            };

            if is_same_path(&candidate, &resolved) || is_strict_descendant(&candidate, &resolved) {
                tracing::info!(
                    candidate = %candidate.display(),
                    matched = %resolved.display(),
                    "Directory allowed"
                );
                return Ok(Decision::Allowed {
                    candidate,
                    matched: resolved,
                });
            }
            resolved_entries.push(resolved);
        }

        tracing::info!(candidate = %candidate.display(), "Directory denied");
        Ok(Decision::Denied {
            candidate,
            allow_list: resolved_entries,
            skipped,
        })
    }

    /// Boolean projection of [`evaluate`](Self::evaluate).
    pub fn is_allowed(&self, candidate: &Path) -> Result<bool, GateError> {
        self.evaluate(candidate).map(|decision| decision.is_allowed())
    }
}
