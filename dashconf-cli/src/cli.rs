//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AppInfoCommand, CompletionsCommand, GetCommand, ListCommand, PropertiesCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect how dashboard configuration resolves for a user.
#[derive(Parser)]
#[command(name = "dashconf")]
#[command(version, about = "Inspect dashboard configuration resolution", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration document to resolve against
    #[arg(long, value_name = "PATH", global = true, env = "DASHCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// User settings file the active profile is read from
    #[arg(long, value_name = "PATH", global = true, env = "DASHCONF_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Profile to resolve for (overrides the settings file)
    #[arg(long, value_name = "ID", global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved value of one property
    Get(GetCommand),

    /// Print every property with its resolved value
    List(ListCommand),

    /// Print the property registry
    Properties(PropertiesCommand),

    /// Validate a configuration document
    Validate(ValidateCommand),

    /// Print the environment-derived app settings
    AppInfo(AppInfoCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
