//! Commands that take raw identifiers: normalize, format, validate, inspect.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::input::collect_inputs;
use crate::output::{print_output, print_summary};

use super::{CommandContext, InputArgs};

#[derive(Debug, Serialize, Tabled)]
struct NormalizedRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Normalized", display = "display_absent")]
    normalized: String,
}

#[derive(Debug, Serialize, Tabled)]
struct FormattedRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Formatted", display = "display_absent")]
    formatted: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason", display = "display_option")]
    reason: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct InspectionRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Normalized", display = "display_absent")]
    normalized: String,

    #[tabled(rename = "Formatted", display = "display_absent")]
    formatted: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason", display = "display_option")]
    reason: Option<String>,
}

/// An empty normalization means "no identifier", not an error.
fn display_absent(value: &str) -> String {
    if value.is_empty() {
        "(none)".to_string()
    } else {
        value.to_string()
    }
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

/// Rejection reason for an identifier, or `None` if it is valid.
fn rejection_reason(input: &str) -> Option<String> {
    attend_rut::validate(input).err().map(|e| e.to_string())
}

pub fn normalize(ctx: CommandContext, args: InputArgs) -> Result<()> {
    let rows: Vec<NormalizedRow> = collect_inputs(args.inputs)?
        .into_iter()
        .map(|input| NormalizedRow {
            normalized: attend_rut::normalize(&input),
            input,
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

pub fn format(ctx: CommandContext, args: InputArgs) -> Result<()> {
    let rows: Vec<FormattedRow> = collect_inputs(args.inputs)?
        .into_iter()
        .map(|input| FormattedRow {
            formatted: attend_rut::format(&input),
            input,
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

pub fn validate(ctx: CommandContext, args: InputArgs) -> Result<()> {
    let rows: Vec<ValidationRow> = collect_inputs(args.inputs)?
        .into_iter()
        .map(validation_row)
        .collect();

    let total = rows.len();
    let valid = rows.iter().filter(|row| row.valid).count();

    print_output(&rows, ctx.format);
    print_summary(valid, total, ctx.format);

    if valid < total {
        return Err(CliError::ValidationFailed {
            invalid: total - valid,
            total,
        }
        .into());
    }
    Ok(())
}

pub fn inspect(ctx: CommandContext, args: InputArgs) -> Result<()> {
    let rows: Vec<InspectionRow> = collect_inputs(args.inputs)?
        .into_iter()
        .map(inspection_row)
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn validation_row(input: String) -> ValidationRow {
    let reason = rejection_reason(&input);
    if let Some(reason) = &reason {
        tracing::info!(input = %input, reason = %reason, "identifier rejected");
    }
    ValidationRow {
        valid: reason.is_none(),
        reason,
        input,
    }
}

fn inspection_row(input: String) -> InspectionRow {
    let reason = rejection_reason(&input);
    InspectionRow {
        normalized: attend_rut::normalize(&input),
        formatted: attend_rut::format(&input),
        valid: reason.is_none(),
        reason,
        input,
    }
}
