//! Identifier input from arguments or stdin.

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use crate::error::CliError;

/// Use the positional arguments if any were given, otherwise read stdin.
pub fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    let inputs = if args.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        args
    };

    if inputs.is_empty() {
        return Err(CliError::NoInput.into());
    }

    tracing::debug!(count = inputs.len(), "collected identifiers");
    Ok(inputs)
}

/// One identifier per line; surrounding whitespace and blank lines are dropped.
///
/// Lines are decoded lossily: only ASCII digits and `K` survive normalization,
/// so a Latin-1 name on the same line must not abort the batch.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", idx + 1))?;
        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
