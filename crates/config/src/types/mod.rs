//! Configuration type definitions for Claude Launcher.
//!
//! Responsibilities:
//! - Define the allow-list and account profile types produced by the loaders.
//! - Enforce the non-empty invariants at construction time.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Path canonicalization or containment checks (see the gate crate).
//!
//! Invariants:
//! - An `AllowList` always holds at least one entry.
//! - An `AccountSnapshot` always holds at least one profile; "no accounts"
//!   is represented by the absence of a snapshot, never an empty one.
//! - Source order is preserved; duplicates are permitted.

mod account;
mod allow_list;

pub use account::{AccountProfile, AccountSnapshot};
pub use allow_list::AllowList;
