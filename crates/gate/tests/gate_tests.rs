//! Filesystem-backed tests for the directory gate.
//!
//! Test coverage:
//! - Exact match and descendants of an allowed directory
//! - Component-boundary handling (`proj` vs `projects`)
//! - Trailing separators and `.`/`..` in configured entries
//! - Symlinks into and out of allowed trees (unix only)
//! - Denials listing resolved entries and skipped stale ones
//! - Empty entries never admitting anything

use std::fs;
use std::path::{Path, PathBuf};

use launcher_gate::{Decision, DirectoryGate, FsResolver, GateError, PathResolver};
use tempfile::TempDir;

/// Canonical form of an existing path, as the gate will see it.
fn canonical(path: &Path) -> PathBuf {
    FsResolver::new().resolve(path).unwrap()
}

struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new(dirs: &[&str]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = canonical(temp_dir.path());
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn gate(&self, entries: &[&str]) -> DirectoryGate {
        DirectoryGate::new(entries.iter().map(|e| self.path(e)).collect())
    }
}

#[test]
fn test_directory_is_allowed_by_itself() {
    let fx = Fixture::new(&["work"]);
    assert!(fx.gate(&["work"]).is_allowed(&fx.path("work")).unwrap());
}

#[test]
fn test_empty_allow_list_admits_nothing() {
    let fx = Fixture::new(&["work"]);
    assert!(!DirectoryGate::new(Vec::new()).is_allowed(&fx.path("work")).unwrap());
}

#[test]
fn test_descendant_is_allowed() {
    let fx = Fixture::new(&["work/app/src"]);
    let decision = fx.gate(&["work"]).evaluate(&fx.path("work/app/src")).unwrap();
    assert_eq!(
        decision,
        Decision::Allowed {
            candidate: fx.path("work/app/src"),
            matched: fx.path("work"),
        }
    );
}

#[test]
fn test_string_prefix_sibling_is_denied() {
    let fx = Fixture::new(&["a/projects", "a/project", "a/projects2"]);
    let gate = fx.gate(&["a/projects"]);

    assert!(!gate.is_allowed(&fx.path("a/project")).unwrap());
    assert!(!gate.is_allowed(&fx.path("a/projects2")).unwrap());
}

#[test]
fn test_parent_of_allowed_directory_is_denied() {
    let fx = Fixture::new(&["a/b"]);
    assert!(!fx.gate(&["a/b"]).is_allowed(&fx.path("a")).unwrap());
}

#[test]
fn test_unnormalized_entry_matches() {
    let fx = Fixture::new(&["work", "other"]);
    let entry = PathBuf::from(format!("{}/other/../work/", fx.root.display()));
    let gate = DirectoryGate::new(vec![entry]);

    assert!(gate.is_allowed(&fx.path("work")).unwrap());
}

#[test]
fn test_relative_candidate_uses_resolver_base() {
    let fx = Fixture::new(&["work/sub"]);
    let gate = DirectoryGate::with_resolver(
        vec![fx.path("work")],
        FsResolver::with_base_dir(fx.path("work")),
    );
    assert!(gate.is_allowed(Path::new("sub")).unwrap());
    assert!(gate.is_allowed(Path::new(".")).unwrap());
    assert!(!gate.is_allowed(Path::new("..")).unwrap());
}

#[test]
fn test_denial_lists_resolved_and_skipped_entries() {
    let fx = Fixture::new(&["work", "elsewhere"]);
    let gate = fx.gate(&["missing", "work"]);

    let decision = gate.evaluate(&fx.path("elsewhere")).unwrap();
    assert_eq!(
        decision,
        Decision::Denied {
            candidate: fx.path("elsewhere"),
            allow_list: vec![fx.path("work")],
            skipped: vec![fx.path("missing")],
        }
    );

    match decision.into_result() {
        Err(GateError::AccessDenied { candidate, .. }) => {
            assert_eq!(candidate, fx.path("elsewhere"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }
}

#[test]
fn test_only_stale_entries_deny_without_error() {
    let fx = Fixture::new(&["here"]);
    let decision = fx.gate(&["gone", "also-gone"]).evaluate(&fx.path("here")).unwrap();
    assert!(!decision.is_allowed());
}

#[test]
fn test_empty_entry_does_not_admit_the_base_directory() {
    let fx = Fixture::new(&["work"]);
    let gate = DirectoryGate::with_resolver(
        vec![PathBuf::from("")],
        FsResolver::with_base_dir(fx.path("work")),
    );

    let decision = gate.evaluate(Path::new(".")).unwrap();
    assert_eq!(
        decision,
        Decision::Denied {
            candidate: fx.path("work"),
            allow_list: Vec::new(),
            skipped: vec![PathBuf::from("")],
        }
    );
}

#[cfg(unix)]
mod symlinks {
    use super::*;
    use std::os::unix::fs::symlink;

    #[test]
    fn test_symlink_inside_allowed_tree_pointing_out_is_denied() {
        let fx = Fixture::new(&["allowed", "secret"]);
        symlink(fx.path("secret"), fx.path("allowed/escape")).unwrap();

        let decision = fx.gate(&["allowed"]).evaluate(&fx.path("allowed/escape")).unwrap();
        assert!(!decision.is_allowed());
        assert_eq!(decision.candidate(), fx.path("secret"));
    }

    #[test]
    fn test_symlink_outside_pointing_into_allowed_tree_is_allowed() {
        let fx = Fixture::new(&["allowed/app"]);
        symlink(fx.path("allowed/app"), fx.path("shortcut")).unwrap();

        assert!(fx.gate(&["allowed"]).is_allowed(&fx.path("shortcut")).unwrap());
    }

    #[test]
    fn test_symlinked_allow_list_entry_is_resolved() {
        let fx = Fixture::new(&["real/app"]);
        symlink(fx.path("real"), fx.path("alias")).unwrap();

        let decision = fx.gate(&["alias"]).evaluate(&fx.path("real/app")).unwrap();
        assert_eq!(
            decision,
            Decision::Allowed {
                candidate: fx.path("real/app"),
                matched: fx.path("real"),
            }
        );
    }

    #[test]
    fn test_dangling_symlink_entry_is_skipped() {
        let fx = Fixture::new(&["work"]);
        symlink(fx.path("nowhere"), fx.path("dangling")).unwrap();

        let decision = fx.gate(&["dangling"]).evaluate(&fx.path("work")).unwrap();
        assert_eq!(
            decision,
            Decision::Denied {
                candidate: fx.path("work"),
                allow_list: Vec::new(),
                skipped: vec![fx.path("dangling")],
            }
        );
    }
}
