//! Output types for mock generation.
//!
//! [`MockOutput`] is the append-only fragment sink threaded through every
//! generation step. [`GeneratedMock`] is the final result: the rendered
//! mock header and source, ready for the file writer.
//!
//! # Examples
//!
//! ```
//! use cmockgen_codegen::MockOutput;
//!
//! let mut output = MockOutput::new();
//! output.push("#ifndef _MOCKUART_H\n");
//! output.push("#define _MOCKUART_H\n\n");
//!
//! assert_eq!(output.len(), 2);
//! assert_eq!(output.render(), "#ifndef _MOCKUART_H\n#define _MOCKUART_H\n\n");
//! ```

use cmockgen_core::MockName;
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of generated text fragments.
///
/// Fragments are never parsed or rewritten; rendering is plain
/// concatenation in push order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockOutput {
    fragments: Vec<String>,
}

impl MockOutput {
    /// Creates an empty sink.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Appends one fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends fragments in iteration order.
    pub fn extend<I>(&mut self, fragments: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fragments
            .extend(fragments.into_iter().map(Into::into));
    }

    /// Fragments in emission order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if nothing was emitted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Concatenates all fragments into the final file text.
    #[must_use]
    pub fn render(&self) -> String {
        self.fragments.concat()
    }

    /// Consumes the sink and returns its fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the mock output directory
    pub path: String,
    /// Full file content
    pub content: String,
}

/// The rendered header and source of one mock.
///
/// # Examples
///
/// ```
/// use cmockgen_codegen::{GeneratedFile, GeneratedMock};
/// use cmockgen_core::{MockName, ModuleName};
///
/// let mut mock = GeneratedMock::new(MockName::derive("Mock", &ModuleName::new("uart")));
/// mock.add_file(GeneratedFile {
///     path: "Mockuart.h".to_string(),
///     content: String::new(),
/// });
///
/// assert_eq!(mock.file_count(), 1);
/// assert!(mock.file("Mockuart.h").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMock {
    /// Root symbol of the mock
    pub mock_name: MockName,
    /// Generated files, header first
    pub files: Vec<GeneratedFile>,
}

impl GeneratedMock {
    /// Creates an empty result for `mock_name`.
    #[must_use]
    pub const fn new(mock_name: MockName) -> Self {
        Self {
            mock_name,
            files: Vec::new(),
        }
    }

    /// Adds a generated file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Looks up a generated file by path.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }

    /// Returns an iterator over the generated files.
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }
}
