//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Collect the arguments passed through to the launched tool.
//! - Provide config path resolution helpers.
//!
//! Non-responsibilities:
//! - Does not execute anything (see `dispatch` module).
//! - Does not load configuration (see `launcher_config::ConfigLoader`).

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Each invocation:
  1. Checks that the current directory is inside an allowed directory
  2. Resolves an account (--account, or a prompt when several are configured)
  3. Asks whether to continue the previous session
  4. Launches Claude Code with the matching flags

Configuration (highest priority first):
  Allowed directories:
    1. CLAUDE_SAFE_DIRS, a list separated like PATH
       export CLAUDE_SAFE_DIRS=\"$HOME/projects:$HOME/work\"
    2. \"allowedDirs\" in ~/.config/claude-launcher/config.json
       {\"allowedDirs\": [\"~/projects\"]}

  Accounts (optional):
    1. CLAUDE_ACCOUNTS, comma-separated Name:Directory pairs
       export CLAUDE_ACCOUNTS=\"Personal:~/.claude-personal,Work:~/.claude-work\"
    2. \"accounts\" in the same config file
       {\"accounts\": [{\"name\": \"Work\", \"profileDir\": \"~/.claude-work\"}]}

Examples:
  claude-launcher
  claude-launcher --account Work
  claude-launcher --show-dirs
  claude-launcher -- --model opus
";

#[derive(Parser, Debug)]
#[command(name = "claude-launcher")]
#[command(about = "Launch Claude Code only from allowed directories, with per-account profiles", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Account name to use (skips interactive selection when found)
    #[arg(short, long, value_name = "NAME")]
    pub account: Option<String>,

    /// Show configured allowed directories and exit
    #[arg(short = 'l', long)]
    pub show_dirs: bool,

    /// Show configuration file path and contents and exit
    #[arg(short = 'c', long)]
    pub show_config: bool,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via CLAUDE_LAUNCHER_CONFIG environment variable.
    #[arg(long, env = "CLAUDE_LAUNCHER_CONFIG", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Program to launch
    #[arg(long, env = "CLAUDE_LAUNCHER_BIN", value_name = "PATH", default_value = "claude")]
    pub claude_bin: PathBuf,

    /// Arguments passed through to Claude Code
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CLAUDE_ARGS")]
    pub claude_args: Vec<String>,
}

impl Cli {
    /// Config path override, ignoring blank values so the default applies.
    pub fn config_path_override(&self) -> Option<PathBuf> {
        self.config_path
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
            .cloned()
    }
}
