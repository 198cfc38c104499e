//! Generate command implementation.
//!
//! Reads parsed function descriptors and produces the mock header and
//! source for one module.

use crate::commands::common::load_config;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use cmockgen_codegen::{GeneratedMock, GenerationContext, MockGenerator, PluginSet};
use cmockgen_core::cli::{ExitCode, OutputFormat};
use cmockgen_core::{ModuleName, ParsedHeader};
use cmockgen_files::MockWriter;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of mock generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Module the mock was generated for
    pub module: String,
    /// Name of the generated mock
    pub mock_name: String,
    /// Number of mocked functions
    pub function_count: usize,
    /// Output directory
    pub output_dir: String,
    /// Generated files (written paths, or file names on a dry run)
    pub files: Vec<String>,
    /// Whether files were left unwritten
    pub dry_run: bool,
}

/// Runs the generate command.
///
/// Loads the configuration, reads the descriptor document, generates the
/// mock pair and writes it below the output directory. With `dry_run` the
/// generated files are printed instead of written.
///
/// # Arguments
///
/// * `descriptors` - JSON document with the parsed functions of the module
/// * `module` - Name of the module being mocked
/// * `config` - Optional configuration file
/// * `output_dir` - Optional output directory, overriding `mock_path`
/// * `dry_run` - Print files instead of writing them
/// * `output_format` - Format of the summary
///
/// # Errors
///
/// Returns an error if:
/// - the module name is empty
/// - the configuration or descriptor document cannot be loaded
/// - a plugin or return helper fails during generation
/// - writing the files fails
pub fn run(
    descriptors: &Path,
    module: &str,
    config: Option<&Path>,
    output_dir: Option<PathBuf>,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    if module.trim().is_empty() {
        return Err(cmockgen_core::Error::InvalidArgument(
            "module name cannot be empty".to_string(),
        )
        .into());
    }

    let mut config = load_config(config)?;
    if let Some(dir) = output_dir {
        config.mock_path = dir;
    }

    let header = ParsedHeader::from_file(descriptors)
        .with_context(|| format!("failed to read descriptors from {}", descriptors.display()))?;
    for name in header.duplicate_names() {
        warn!("Function '{}' is declared more than once in {}", name, descriptors.display());
    }

    let context = GenerationContext::resolve(&config, ModuleName::new(module))
        .context("failed to resolve generation context")?;
    let mock = MockGenerator::with_default_returns(context, PluginSet::new())
        .generate(&header.functions)
        .context("mock generation failed")?;

    let files = if dry_run {
        print_files(&mock);
        mock.files().map(|file| file.path.clone()).collect()
    } else {
        MockWriter::new(&config.mock_path)
            .write(&mock)
            .context("failed to write generated mock")?
            .iter()
            .map(|path| path.display().to_string())
            .collect()
    };

    info!(
        "Generated {} for {} function(s)",
        mock.mock_name,
        header.functions.len()
    );

    let result = GenerationResult {
        module: module.to_string(),
        mock_name: mock.mock_name.to_string(),
        function_count: header.functions.len(),
        output_dir: config.mock_path.display().to_string(),
        files,
        dry_run,
    };

    let formatted = format_output(&result, output_format)?;
    if dry_run {
        eprintln!("{formatted}");
    } else {
        println!("{formatted}");
    }

    Ok(ExitCode::SUCCESS)
}

fn print_files(mock: &GeneratedMock) {
    for file in mock.files() {
        println!("// ---- {} ----", file.path);
        print!("{}", file.content);
    }
}
