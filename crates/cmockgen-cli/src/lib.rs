//! cmockgen CLI library.
//!
//! Exposes the command implementations and output formatters so they can
//! be tested without spawning the binary.

#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod formatters;
