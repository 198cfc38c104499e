//! Output formatters for CLI reports.
//!
//! Provides consistent formatting across all commands for JSON, text, and
//! pretty output modes.

use anyhow::Result;
use cmockgen_core::cli::OutputFormat;
use colored::Colorize;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use cmockgen_cli::formatters::format_output;
/// use cmockgen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Report {
///     mock_name: String,
/// }
///
/// let report = Report {
///     mock_name: "Mockuart".to_string(),
/// };
///
/// let output = format_output(&report, OutputFormat::Json)?;
/// assert!(output.contains("\"mock_name\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => {
            let value = serde_json::to_value(data)?;
            Ok(pretty_value(&value, 0))
        }
    }
}

/// Formats a JSON value with colors and indentation.
fn pretty_value(value: &serde_json::Value, indent: usize) -> String {
    use serde_json::Value;

    let indent_str = "  ".repeat(indent);
    let next_indent_str = "  ".repeat(indent + 1);

    match value {
        Value::Null => "null".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => format!("\"{}\"", s.green()),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let body: Vec<String> = items
                .iter()
                .map(|item| format!("{next_indent_str}{}", pretty_value(item, indent + 1)))
                .collect();
            format!("[\n{}\n{indent_str}]", body.join(",\n"))
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let body: Vec<String> = map
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{next_indent_str}\"{}\": {}",
                        key.blue().bold(),
                        pretty_value(val, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{indent_str}}}", body.join(",\n"))
        }
    }
}
