//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide the terminal-backed `AccountSelector`.
//! - Ask whether to continue the previous session.
//!
//! Does NOT handle:
//! - Deciding when a prompt is needed (see `launcher_config::AccountRegistry`).

use std::io::{BufRead, Write};

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use launcher_config::{AccountProfile, AccountSelector, SelectionError};

use crate::printer::Printer;

/// Arrow-key account picker on the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerSelector;

impl AccountSelector for DialoguerSelector {
    fn select(&self, accounts: &[AccountProfile]) -> Result<usize, SelectionError> {
        let items: Vec<String> = accounts.iter().map(ToString::to_string).collect();

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select Claude account")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| SelectionError::Unavailable(e.to_string()))?
            .ok_or(SelectionError::Cancelled)
    }
}

/// Ask whether to continue the previous session.
///
/// Reads one line from `input`. `n` or `no` (any case) starts fresh; any
/// other answer, an empty line, or end of input continues.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub fn ask_continue<R: BufRead, W: Write>(
    input: &mut R,
    printer: &mut Printer<W>,
) -> std::io::Result<bool> {
    printer.show_continue_prompt();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        printer.print("\n");
        return Ok(true);
    }

    let answer = line.trim().to_ascii_lowercase();
    Ok(!matches!(answer.as_str(), "n" | "no"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> bool {
        let mut printer = Printer::new(Vec::new());
        ask_continue(&mut Cursor::new(input.as_bytes()), &mut printer).unwrap()
    }

    #[test]
    fn test_no_answers_start_fresh() {
        for input in ["n\n", "N\n", "no\n", "  No  \n", "NO"] {
            assert!(!ask(input), "{input:?} should start a new session");
        }
    }

    #[test]
    fn test_other_answers_continue() {
        for input in ["y\n", "yes\n", "\n", "maybe\n", "nope\n"] {
            assert!(ask(input), "{input:?} should continue");
        }
    }

    #[test]
    fn test_end_of_input_continues() {
        assert!(ask(""));
    }

    #[test]
    fn test_read_error_is_returned() {
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }
        }

        let mut printer = Printer::new(Vec::new());
        let mut input = std::io::BufReader::new(Failing);
        assert!(ask_continue(&mut input, &mut printer).is_err());
    }

    #[test]
    fn test_prompt_is_printed() {
        colored::control::set_override(false);
        let mut printer = Printer::new(Vec::new());
        ask_continue(&mut Cursor::new(b"y\n".as_slice()), &mut printer).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "Continue previous Claude session?\n  [Y/n] (default: y): ");
    }
}
