//! Generation of C mocks from parsed function descriptors.
//!
//! The [`MockGenerator`] assembles the fixed C skeleton of a mock (include
//! guards, instance structure, `Init`/`Destroy`/`Verify` functions, one stub
//! per function) and interleaves it with fragments contributed by a
//! [`PluginSet`]. Every step appends to a [`MockOutput`] owned by the
//! caller, so emission order is output order.
//!
//! # Examples
//!
//! ```
//! use cmockgen_codegen::{GenerationContext, MockGenerator, PluginSet};
//! use cmockgen_core::{FunctionDescriptor, MockConfig, ModuleName};
//!
//! let config = MockConfig::default();
//! let context = GenerationContext::resolve(&config, ModuleName::new("uart")).unwrap();
//! let generator = MockGenerator::with_default_returns(context, PluginSet::new());
//!
//! let functions = vec![
//!     FunctionDescriptor::builder("uart_read", "int").args("void", vec![]).build(),
//! ];
//! let mock = generator.generate(&functions).unwrap();
//!
//! assert_eq!(mock.file_count(), 2);
//! assert!(mock.file("Mockuart.c").unwrap().content.contains("int uart_read(void)"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod generator;
pub mod output;
pub mod plugin;
pub mod returns;

pub use context::GenerationContext;
pub use generator::MockGenerator;
pub use output::{GeneratedFile, GeneratedMock, MockOutput};
pub use plugin::{FunctionHook, Plugin, PluginSet};
pub use returns::{ReturnValueHandler, ZeroedReturn};
