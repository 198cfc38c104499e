//! Persistence of generated mocks.
//!
//! Writes the header and source of a [`GeneratedMock`](cmockgen_codegen::GeneratedMock)
//! into an output directory. Every file is staged in a temporary file next
//! to its destination and only moved into place once all files of the mock
//! were staged, so a failed run leaves no partial mock behind.
//!
//! # Examples
//!
//! ```no_run
//! use cmockgen_codegen::{GeneratedFile, GeneratedMock};
//! use cmockgen_core::{MockName, ModuleName};
//! use cmockgen_files::MockWriter;
//!
//! let mut mock = GeneratedMock::new(MockName::derive("Mock", &ModuleName::new("uart")));
//! mock.add_file(GeneratedFile {
//!     path: "Mockuart.h".to_string(),
//!     content: "/* header */\n".to_string(),
//! });
//!
//! let written = MockWriter::new("test/mocks").write(&mock)?;
//! assert_eq!(written.len(), 1);
//! # Ok::<(), cmockgen_files::FilesError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod types;
pub mod writer;

pub use types::{FilesError, Result};
pub use writer::MockWriter;
