//! Library exports for dashconf-cli.
//!
//! This module exports the CLI structure so it can be inspected and tested
//! without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
