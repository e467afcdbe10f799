//! Account profile types.
//!
//! Responsibilities:
//! - Define `AccountProfile`, a named profile directory for the launched tool.
//! - Define `AccountSnapshot`, the ordered profiles loaded for one invocation.
//!
//! Does NOT handle:
//! - Parsing account definitions (see `loader::source`).
//! - Choosing between accounts (see `accounts` module).
//!
//! Invariants:
//! - Name uniqueness is not enforced; lookups return the first match.
//! - Name matching is exact and case-sensitive.

use std::fmt;
use std::path::{Path, PathBuf};

/// A named account and the profile directory the tool should use for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    name: String,
    profile_dir: PathBuf,
}

impl AccountProfile {
    /// Create a profile, returning `None` if either field is empty.
    pub fn new(name: impl Into<String>, profile_dir: impl Into<PathBuf>) -> Option<Self> {
        let name = name.into();
        let profile_dir = profile_dir.into();
        if name.is_empty() || profile_dir.as_os_str().is_empty() {
            return None;
        }
        Some(Self { name, profile_dir })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }
}

impl fmt::Display for AccountProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.profile_dir.display())
    }
}

/// Profiles loaded for a single invocation, in source order.
///
/// Snapshots are built fresh by every load and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    profiles: Vec<AccountProfile>,
}

impl AccountSnapshot {
    /// Build a snapshot, returning `None` when `profiles` is empty.
    pub fn new(profiles: Vec<AccountProfile>) -> Option<Self> {
        if profiles.is_empty() {
            None
        } else {
            Some(Self { profiles })
        }
    }

    pub fn profiles(&self) -> &[AccountProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// First profile whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&AccountProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    pub fn into_profiles(self) -> Vec<AccountProfile> {
        self.profiles
    }
}
