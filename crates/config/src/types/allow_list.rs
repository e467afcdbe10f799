//! Allowed directory list.

use std::path::{Path, PathBuf};

/// Ordered, non-empty list of directories the launcher may run in.
///
/// Entries are stored after `~` expansion but before canonicalization;
/// resolving symlinks is the gate's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    dirs: Vec<PathBuf>,
}

impl AllowList {
    /// Build an allow-list, returning `None` when `dirs` is empty.
    pub fn new(dirs: Vec<PathBuf>) -> Option<Self> {
        if dirs.is_empty() {
            None
        } else {
            Some(Self { dirs })
        }
    }

    /// Entries in source order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn into_dirs(self) -> Vec<PathBuf> {
        self.dirs
    }
}
