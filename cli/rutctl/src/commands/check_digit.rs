//! Check-digit command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use attend_rut::compute_check_digit;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct CheckDigitArgs {
    /// Digit bodies (no dots, no check character).
    #[arg(value_name = "BODY", required = true)]
    bodies: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckDigitRow {
    #[tabled(rename = "Body")]
    body: String,

    #[tabled(rename = "Check")]
    check_digit: char,

    #[tabled(rename = "RUT")]
    rut: String,
}

pub fn run(ctx: CommandContext, args: CheckDigitArgs) -> Result<()> {
    let rows = args
        .bodies
        .iter()
        .map(|body| check_digit_row(body))
        .collect::<Result<Vec<_>, _>>()?;

    print_output(&rows, ctx.format);
    Ok(())
}

/// The library treats non-digit bodies as a caller bug, so reject them here.
fn check_digit_row(body: &str) -> Result<CheckDigitRow, CliError> {
    let body = body.trim();
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CliError::NonDigitBody(body.to_string()));
    }

    let check_digit = compute_check_digit(body);
    tracing::debug!(body, %check_digit, "computed check digit");

    Ok(CheckDigitRow {
        body: body.to_string(),
        check_digit,
        rut: attend_rut::format(&format!("{body}-{check_digit}")),
    })
}
