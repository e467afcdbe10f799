//! Lexical path normalization and comparison.
//!
//! Responsibilities:
//! - Remove `.` components, fold `..` into its parent and drop redundant separators.
//! - Compare cleaned paths for equality and strict descent.
//!
//! Does NOT handle:
//! - Symlinks or any other filesystem access (see resolver.rs).
//!
//! Invariants:
//! - `clean_path` is idempotent.
//! - `..` directly under the root stays at the root; it never escapes it.
//! - Descent is decided on whole components, so `/a/project` is never
//!   inside `/a/proj`.

use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

/// Lexically normalize `path`.
///
/// An input that cleans down to nothing becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                // Leading `..` of a relative path has nothing to fold into.
                Some(Component::ParentDir | Component::CurDir) | None => {
                    components.push(Component::ParentDir);
                }
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// Whether `a` and `b` name the same path once cleaned.
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    clean_path(a) == clean_path(b)
}

/// Whether `child` lies strictly below `parent`.
///
/// Both paths are cleaned and padded with one trailing separator before the
/// prefix test; a path is never its own descendant.
pub fn is_strict_descendant(child: &Path, parent: &Path) -> bool {
    let child = clean_path(child);
    let parent = clean_path(parent);
    if child == parent {
        return false;
    }

    let mut parent_str = parent.to_string_lossy().into_owned();
    // The root already ends with a separator.
    if !parent_str.ends_with(MAIN_SEPARATOR_STR) {
        parent_str.push_str(MAIN_SEPARATOR_STR);
    }
    let child_str = format!("{}{}", child.to_string_lossy(), MAIN_SEPARATOR_STR);

    child_str.starts_with(&parent_str)
}
