//! Configuration file location and parsing.
//!
//! Responsibilities:
//! - Determine the default configuration file path.
//! - Read and parse the JSON configuration file.
//! - Report the file's state for `--show-config`.
//!
//! Does NOT handle:
//! - Environment variable precedence (see `loader` module).
//! - Writing the file; the launcher treats it as read-only user input.
//!
//! Invariants:
//! - The documented location is `~/.config/claude-launcher/config.json` on
//!   every platform.
//! - Read failures and parse failures are reported as distinct errors.

mod file;
mod path;

pub use file::{AccountEntry, ConfigFile, ConfigFileStatus, inspect_config_file};
pub use path::default_config_path;

pub(crate) use file::read_config_file;
