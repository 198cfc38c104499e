//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use cmockgen_core::MockConfig;
use cmockgen_core::cli::ExitCode;
use cmockgen_files::FilesError;
use std::path::Path;

/// Loads the mock configuration used by a command.
///
/// Reads `path` when given, otherwise falls back to the built-in defaults.
/// The result is always validated.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// fails validation.
///
/// # Examples
///
/// ```
/// use cmockgen_cli::commands::common::load_config;
///
/// let config = load_config(None).unwrap();
/// assert_eq!(config.mock_prefix, "Mock");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<MockConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            MockConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => MockConfig::default(),
    };

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Maps a failed command onto the process exit code.
///
/// Bad configuration or input documents give [`ExitCode::INVALID_INPUT`],
/// plugin and persistence failures give [`ExitCode::GENERATION_ERROR`],
/// anything else gives [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use cmockgen_cli::commands::common::exit_code_for;
/// use cmockgen_core::cli::ExitCode;
///
/// let err = anyhow::anyhow!("stdout closed");
/// assert_eq!(exit_code_for(&err), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<FilesError>().is_some() {
        return ExitCode::GENERATION_ERROR;
    }
    match err.downcast_ref::<cmockgen_core::Error>() {
        Some(e) if e.is_plugin_error() => ExitCode::GENERATION_ERROR,
        Some(_) => ExitCode::INVALID_INPUT,
        None => ExitCode::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, MockConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmockgen.toml");
        fs::write(&path, "mock_prefix = \"Fake\"\nincludes = [\"board.h\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.mock_prefix, "Fake");
        assert_eq!(config.includes, vec!["board.h".to_string()]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }

    #[test]
    fn test_exit_code_for_invalid_input() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_plugin_failure() {
        let err = anyhow::Error::from(cmockgen_core::Error::PluginFailed {
            plugin: "expect".to_string(),
            hook: "mock_verify".to_string(),
            message: "boom".to_string(),
        })
        .context("mock generation failed");
        assert_eq!(exit_code_for(&err), ExitCode::GENERATION_ERROR);
    }

    #[test]
    fn test_exit_code_for_write_failure() {
        let err = anyhow::Error::from(FilesError::DuplicatePath {
            path: "Mockuart.h".to_string(),
        })
        .context("failed to write generated mock");
        assert_eq!(exit_code_for(&err), ExitCode::GENERATION_ERROR);
    }

    #[test]
    fn test_exit_code_for_other_failure() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("broken pipe")), ExitCode::ERROR);
    }

    #[test]
    fn test_load_invalid_prefix_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmockgen.toml");
        fs::write(&path, "mock_prefix = \"Mock-\"\n").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
