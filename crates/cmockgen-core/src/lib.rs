//! Core types, configuration, and errors for C mock generation.
//!
//! This crate provides the foundational types shared by every other crate
//! in the cmockgen workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`ModuleName`, `MockName`)
//! - The immutable [`FunctionDescriptor`] handed over by the header parser
//! - Error hierarchy with contextual information
//! - Configuration ([`MockConfig`]) and the [`ContextSource`] trait the
//!   generator resolves its context from

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod function;
mod types;

pub mod cli;

pub use config::{ContextSource, MockConfig, MockConfigBuilder};
pub use error::{Error, Result};
pub use function::{FunctionDescriptor, FunctionDescriptorBuilder, Parameters, ParsedHeader};
pub use types::{MockName, ModuleName};
