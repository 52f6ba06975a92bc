//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parses the `--format` flag; anything other than `json` means table.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            other => {
                tracing::warn!(format = other, "unknown output format, using table");
                OutputFormat::Table
            }
        }
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No identifiers.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data)),
    }
}

/// Print a one-line summary under a table. Suppressed for JSON output.
pub fn print_summary(valid: usize, total: usize, format: OutputFormat) {
    if format == OutputFormat::Json {
        return;
    }
    let line = format!("{valid}/{total} valid");
    if valid == total {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_flag() {
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("yaml"), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_typo_falls_back_to_table() {
        // Logged as a warning; never silently upgraded to JSON.
        assert_eq!(OutputFormat::from_flag("jsn"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("JSON"), OutputFormat::Table);
    }

    #[test]
    fn test_format_json_array() {
        #[derive(Serialize)]
        struct Row {
            input: &'static str,
        }
        let json = format_json(&[Row { input: "1-9" }]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["input"], "1-9");
    }
}
