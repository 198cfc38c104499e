//! Error types for mock persistence.
//!
//! # Examples
//!
//! ```
//! use cmockgen_files::FilesError;
//!
//! let error = FilesError::InvalidPathComponent {
//!     path: "../outside.h".to_string(),
//! };
//!
//! assert!(error.is_invalid_path());
//! ```

use thiserror::Error;

/// Errors that can occur while writing generated mocks.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Path is empty or malformed
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// The invalid path
        path: String,
    },

    /// Path escapes the output directory (absolute, or contains '..')
    #[error("Path contains invalid components: {path}")]
    InvalidPathComponent {
        /// The path with invalid components
        path: String,
    },

    /// Two files of one mock target the same path
    #[error("Duplicate file path: {path}")]
    DuplicatePath {
        /// The repeated path
        path: String,
    },

    /// I/O error while staging or persisting a file
    #[error("I/O error on {path}: {source}")]
    IoError {
        /// Path being written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` if the error was caused by a rejected path.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. } | Self::InvalidPathComponent { .. }
        )
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, FilesError>;
