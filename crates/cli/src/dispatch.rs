//! Invocation flow for the launcher.
//!
//! Responsibilities:
//! - Run one invocation end to end: load, gate, pick an account, prompt, launch.
//! - Resolve the account from `--account` with interactive fallback.
//! - Render fatal errors with the guidance each one needs.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Mapping errors to exit codes (see `error`).
//!
//! Invariants:
//! - Nothing is launched unless the working directory was admitted.
//! - A failed interactive selection ends the invocation; there is no retry.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use launcher_config::{
    AccountProfile, AccountRegistry, AccountSelector, ConfigError, ConfigLoader, expand_tilde,
    inspect_config_file,
};
use launcher_gate::{DirectoryGate, GateError};

use crate::args::Cli;
use crate::error::ExitCode;
use crate::interactive::{DialoguerSelector, ask_continue};
use crate::launcher::{LaunchOptions, Launcher};
use crate::printer::Printer;

/// Execute the invocation described by `cli`, returning the exit code.
pub(crate) fn run(cli: Cli) -> Result<i32> {
    let loader = build_loader(&cli, ConfigLoader::new())?;

    if cli.show_config {
        let path = loader
            .config_path()
            .context("Failed to determine config file path")?;
        Printer::new(io::stdout()).show_config_file(&path, &inspect_config_file(&path));
        return Ok(ExitCode::Success.as_i32());
    }

    let mut printer = Printer::new(io::stderr());
    let allow_list = loader
        .load_allow_list()
        .context("Failed to load allowed directories")?;

    if cli.show_dirs {
        printer.show_allowed_dirs(allow_list.dirs());
        return Ok(ExitCode::Success.as_i32());
    }

    DirectoryGate::new(allow_list.into_dirs())
        .evaluate(Path::new("."))
        .context("Failed to check current directory")?
        .into_result()?;
    printer.show_directory_allowed();

    let registry = AccountRegistry::new(&loader);
    let account = resolve_account(
        &registry,
        cli.account.as_deref(),
        &DialoguerSelector,
        &mut printer,
    )?;
    match &account {
        Some(account) => printer.show_account_selected(account),
        None => printer.show_no_accounts_configured(),
    }

    let continue_session =
        ask_continue(&mut io::stdin().lock(), &mut printer).context("Failed to read input")?;
    if continue_session {
        printer.show_continuing_session();
    } else {
        printer.show_starting_new_session();
    }

    let options = LaunchOptions {
        continue_session,
        args: cli.claude_args,
        profile_dir: account.map(|account| account.profile_dir().to_path_buf()),
    };
    Ok(Launcher::new(cli.claude_bin).launch(&options)?)
}

fn build_loader(cli: &Cli, mut loader: ConfigLoader) -> Result<ConfigLoader> {
    if let Some(path) = cli.config_path_override() {
        let raw = path.to_string_lossy();
        let trimmed = raw.trim();
        let path = if trimmed.starts_with('~') {
            expand_tilde(trimmed, loader.environment().home_dir().as_deref())
                .context("Invalid --config-path")?
        } else {
            path.clone()
        };
        loader = loader.with_config_path(path);
    }

    Ok(loader)
}

/// Pick the account for this invocation.
///
/// A name that matches is used directly. A name that does not match prints a
/// warning and falls back to interactive selection, as does no name at all.
pub(crate) fn resolve_account<W: Write>(
    registry: &AccountRegistry<'_>,
    requested: Option<&str>,
    selector: &dyn AccountSelector,
    printer: &mut Printer<W>,
) -> Result<Option<AccountProfile>, ConfigError> {
    if let Some(name) = requested.filter(|name| !name.is_empty()) {
        if let Some(account) = registry.find_by_name(name)? {
            return Ok(Some(account));
        }
        printer.show_account_not_found(name);
    }

    registry.select_interactively(selector)
}

/// Print a fatal error, with configuration guidance or denial details where
/// they apply.
pub(crate) fn report_error<W: Write>(printer: &mut Printer<W>, err: &anyhow::Error) {
    for cause in err.chain() {
        if let Some(ConfigError::ConfigurationMissing { attempts }) =
            cause.downcast_ref::<ConfigError>()
        {
            printer.show_config_error(attempts);
            return;
        }
        if let Some(GateError::AccessDenied {
            candidate,
            allow_list,
            skipped,
        }) = cause.downcast_ref::<GateError>()
        {
            printer.show_access_denied(candidate, allow_list, skipped);
            return;
        }
    }

    printer.error(format_args!("Error: {err:#}\n"));
}
