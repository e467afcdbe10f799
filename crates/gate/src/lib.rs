//! Directory containment gate for Claude Launcher.
//!
//! This crate decides whether a working directory lies inside a configured
//! allow-list. Both sides of every comparison are canonicalized first, so
//! symlinks cannot be used to step in or out of an allowed tree.

mod clean;
mod error;
mod gate;
mod resolver;

pub use clean::{clean_path, is_same_path, is_strict_descendant};
pub use error::GateError;
pub use gate::{Decision, DirectoryGate};
pub use resolver::{FsResolver, PathResolver};
