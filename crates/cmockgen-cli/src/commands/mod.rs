//! Command implementations for the cmockgen CLI.
//!
//! Each command module parses its arguments, executes the operation, and
//! formats output according to the requested format.

pub mod common;
pub mod config;
pub mod generate;
