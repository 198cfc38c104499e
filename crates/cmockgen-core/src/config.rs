//! Configuration for mock generation.
//!
//! [`MockConfig`] is read from TOML and describes how generated mocks look:
//! the symbol prefix, the indentation unit, extra includes and the test
//! framework header. The generator does not read `MockConfig` directly; it
//! resolves its context once through the [`ContextSource`] trait.
//!
//! # Examples
//!
//! ```
//! use cmockgen_core::MockConfig;
//!
//! let config = MockConfig::from_toml_str(r#"
//!     mock_prefix = "Fake"
//!     includes = ["types.h"]
//! "#).unwrap();
//!
//! assert_eq!(config.mock_prefix, "Fake");
//! assert_eq!(config.tab, "  ");
//! assert_eq!(config.include_block(), "#include \"types.h\"\n");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source of the values a generation context is resolved from.
///
/// Each method is called exactly once per generation run. Implementations
/// may fail; the error aborts generation.
pub trait ContextSource {
    /// Indentation unit used throughout generated code.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be resolved.
    fn indent(&self) -> Result<String>;

    /// Prefix applied to the module name to form the mock name.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be resolved.
    fn symbol_prefix(&self) -> Result<String>;

    /// Pre-rendered extra `#include` directives for the mock header.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be resolved.
    fn include_block(&self) -> Result<String>;

    /// Header of the C test framework the mock source includes.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be resolved.
    fn framework_header(&self) -> Result<String>;
}

/// Mock generation settings.
///
/// # Examples
///
/// ```toml
/// mock_prefix = "Mock"
/// tab = "    "
/// includes = ["types.h", "config.h"]
/// framework_header = "unity.h"
/// mock_path = "test/mocks"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Prefix of every generated mock name.
    ///
    /// Default: `Mock`
    pub mock_prefix: String,

    /// Indentation unit.
    ///
    /// Default: two spaces
    pub tab: String,

    /// Headers included by every generated mock header, in order.
    ///
    /// Default: none
    pub includes: Vec<String>,

    /// Test framework header included by every mock source.
    ///
    /// Default: `unity.h`
    pub framework_header: String,

    /// Directory generated mocks are written to.
    ///
    /// Default: `mocks`
    pub mock_path: PathBuf,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            mock_prefix: "Mock".to_string(),
            tab: "  ".to_string(),
            includes: Vec::new(),
            framework_header: "unity.h".to_string(),
            mock_path: PathBuf::from("mocks"),
        }
    }
}

impl MockConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::MockConfig;
    ///
    /// let config = MockConfig::builder()
    ///     .mock_prefix("Stub")
    ///     .tab("\t")
    ///     .include("types.h")
    ///     .build();
    ///
    /// assert_eq!(config.mock_prefix, "Stub");
    /// assert_eq!(config.includes, vec!["types.h".to_string()]);
    /// ```
    #[must_use]
    pub fn builder() -> MockConfigBuilder {
        MockConfigBuilder::new()
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the TOML is malformed or the
    /// resulting configuration is invalid.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("failed to parse configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, otherwise the same
    /// errors as [`MockConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if:
    /// - `mock_prefix` contains characters that are not valid in a C identifier
    /// - `framework_header` is empty
    /// - an include entry is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::MockConfig;
    ///
    /// assert!(MockConfig::default().validate().is_ok());
    ///
    /// let mut invalid = MockConfig::default();
    /// invalid.mock_prefix = "Mock-".to_string();
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self
            .mock_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::ValidationError {
                field: "mock_prefix".to_string(),
                reason: format!("'{}' is not a valid C identifier prefix", self.mock_prefix),
            });
        }

        if self.framework_header.trim().is_empty() {
            return Err(Error::ValidationError {
                field: "framework_header".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        if self.includes.iter().any(|include| include.trim().is_empty()) {
            return Err(Error::ValidationError {
                field: "includes".to_string(),
                reason: "entries cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Renders the configured includes as `#include` lines.
    #[must_use]
    pub fn include_block(&self) -> String {
        self.includes
            .iter()
            .map(|include| format!("#include \"{include}\"\n"))
            .collect()
    }
}

impl ContextSource for MockConfig {
    fn indent(&self) -> Result<String> {
        Ok(self.tab.clone())
    }

    fn symbol_prefix(&self) -> Result<String> {
        Ok(self.mock_prefix.clone())
    }

    fn include_block(&self) -> Result<String> {
        Ok(Self::include_block(self))
    }

    fn framework_header(&self) -> Result<String> {
        Ok(self.framework_header.clone())
    }
}

/// Builder for [`MockConfig`].
#[derive(Debug, Clone, Default)]
pub struct MockConfigBuilder {
    config: MockConfig,
}

impl MockConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mock symbol prefix.
    #[must_use]
    pub fn mock_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.mock_prefix = prefix.into();
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn tab(mut self, tab: impl Into<String>) -> Self {
        self.config.tab = tab.into();
        self
    }

    /// Appends an extra header include.
    #[must_use]
    pub fn include(mut self, header: impl Into<String>) -> Self {
        self.config.includes.push(header.into());
        self
    }

    /// Sets the test framework header.
    #[must_use]
    pub fn framework_header(mut self, header: impl Into<String>) -> Self {
        self.config.framework_header = header.into();
        self
    }

    /// Sets the output directory for generated mocks.
    #[must_use]
    pub fn mock_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.mock_path = path.into();
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn build(self) -> MockConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MockConfig::default();
        assert_eq!(config.mock_prefix, "Mock");
        assert_eq!(config.tab, "  ");
        assert!(config.includes.is_empty());
        assert_eq!(config.framework_header, "unity.h");
        assert_eq!(config.mock_path, PathBuf::from("mocks"));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = MockConfig::from_toml_str("").unwrap();
        assert_eq!(config, MockConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = MockConfig::from_toml_str(
            r#"
            mock_prefix = "Fake"
            tab = "\t"
            includes = ["a.h", "b.h"]
            framework_header = "unity_fixture.h"
            mock_path = "build/mocks"
            "#,
        )
        .unwrap();

        assert_eq!(config.mock_prefix, "Fake");
        assert_eq!(config.tab, "\t");
        assert_eq!(config.framework_header, "unity_fixture.h");
        assert_eq!(config.mock_path, PathBuf::from("build/mocks"));
        assert_eq!(config.include_block(), "#include \"a.h\"\n#include \"b.h\"\n");
    }

    #[test]
    fn test_malformed_toml() {
        let err = MockConfig::from_toml_str("mock_prefix = ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let err = MockConfig::from_toml_str("mock_prefix = \"Mock Me\"").unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_empty_prefix_allowed() {
        let config = MockConfig::builder().mock_prefix("").build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_include_rejected() {
        let config = MockConfig::builder().include(" ").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_framework_header_rejected() {
        let config = MockConfig::builder().framework_header("").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_context_source_values() {
        let config = MockConfig::builder()
            .mock_prefix("Mock")
            .include("included.h")
            .build();

        assert_eq!(config.indent().unwrap(), "  ");
        assert_eq!(config.symbol_prefix().unwrap(), "Mock");
        assert_eq!(
            ContextSource::include_block(&config).unwrap(),
            "#include \"included.h\"\n"
        );
        assert_eq!(config.framework_header().unwrap(), "unity.h");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cmockgen.toml");
        std::fs::write(&path, "mock_prefix = \"Stub\"\n").unwrap();

        let config = MockConfig::from_file(&path).unwrap();
        assert_eq!(config.mock_prefix, "Stub");
    }
}
