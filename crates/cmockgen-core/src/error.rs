//! Error types for C mock generation.
//!
//! Every fallible operation in the workspace reports a variant of [`Error`].
//! Collaborator faults (a plugin, the configuration source, the return-value
//! helper) are never swallowed; they travel up to the driver, which discards
//! the partial output.
//!
//! # Examples
//!
//! ```
//! use cmockgen_core::{Error, Result};
//!
//! fn check_prefix(prefix: &str) -> Result<()> {
//!     if prefix.contains(' ') {
//!         return Err(Error::ConfigError {
//!             message: "mock_prefix cannot contain spaces".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_prefix("Mock ").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for mock generation.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when configuration is invalid, unreadable, or cannot be
    /// resolved into a generation context.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// A plugin failed while contributing a fragment.
    #[error("Plugin '{plugin}' failed in hook '{hook}': {message}")]
    PluginFailed {
        /// Name of the failing plugin
        plugin: String,
        /// Hook that was being run
        hook: String,
        /// Description of the failure
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when the parser's JSON document cannot be read.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// I/O failure while reading an input file.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid tab".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if a plugin caused this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::Error;
    ///
    /// let err = Error::PluginFailed {
    ///     plugin: "expect".to_string(),
    ///     hook: "mock_verify".to_string(),
    ///     message: "unsupported return type".to_string(),
    /// };
    /// assert!(err.is_plugin_error());
    /// ```
    #[must_use]
    pub const fn is_plugin_error(&self) -> bool {
        matches!(self, Self::PluginFailed { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }
}

/// Result type alias for mock generation.
///
/// # Examples
///
/// ```
/// use cmockgen_core::{Error, Result};
///
/// fn non_empty(name: &str) -> Result<&str> {
///     if name.is_empty() {
///         return Err(Error::InvalidArgument("empty name".to_string()));
///     }
///     Ok(name)
/// }
///
/// assert!(non_empty("Foo").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
