//! Config command implementation.
//!
//! Prints the configuration `generate` would use, after defaults are
//! applied and validation has passed.

use crate::commands::common::load_config;
use crate::formatters::format_output;
use anyhow::Result;
use cmockgen_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing::info;

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or formatted.
pub fn run(config: Option<&Path>, output_format: OutputFormat) -> Result<ExitCode> {
    let resolved = load_config(config)?;
    info!(
        "Resolved configuration from {}",
        config.map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
    );

    println!("{}", format_output(&resolved, output_format)?);
    Ok(ExitCode::SUCCESS)
}
