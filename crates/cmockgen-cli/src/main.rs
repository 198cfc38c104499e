//! cmockgen command-line interface.
//!
//! Generates C mock modules for unit testing from parsed function
//! descriptors.
//!
//! # Commands
//!
//! - `generate` - Generate a mock header and source for one module
//! - `config` - Show the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmockgen_cli::commands;
use cmockgen_cli::commands::common::exit_code_for;
use cmockgen_core::cli::{ExitCode, OutputFormat};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// C mock generator.
///
/// Turns the parsed functions of a C header into a mock module that a
/// unit-test framework can link instead of the real implementation.
#[derive(Parser, Debug)]
#[command(name = "cmockgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a mock header and source for one module.
    ///
    /// Reads a JSON document of parsed function descriptors and writes
    /// `<prefix><module>.h` and `<prefix><module>.c`.
    Generate {
        /// JSON document with the parsed functions
        descriptors: PathBuf,

        /// Name of the module being mocked (header file stem)
        #[arg(short, long)]
        module: String,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory, overrides `mock_path` from the configuration
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the generated files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the resolved configuration.
    Config {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = match execute_command(cli.command, output_format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            descriptors,
            module,
            config,
            output_dir,
            dry_run,
        } => commands::generate::run(
            &descriptors,
            &module,
            config.as_deref(),
            output_dir,
            dry_run,
            output_format,
        ),
        Commands::Config { config } => commands::config::run(config.as_deref(), output_format),
    }
}
