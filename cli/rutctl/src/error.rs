//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} identifier(s) failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    #[error("check digit body '{0}' must contain only digits")]
    NonDigitBody(String),

    #[error("no identifiers given")]
    NoInput,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NonDigitBody(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass only the body, without dots or the check character.".yellow()
                );
            }
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass identifiers as arguments or one per line on stdin.".yellow()
                );
            }
            _ => {}
        }
    }
}
