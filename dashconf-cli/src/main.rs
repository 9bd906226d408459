//! Main entry point for the dashconf CLI.
//!
//! This is the command-line interface for inspecting dashboard configuration
//! resolution:
//! - `get`: Print one resolved value
//! - `list`: Print every property with its resolved value
//! - `properties`: Print the property registry
//! - `validate`: Validate a configuration document
//! - `app-info`: Print the environment-derived app settings

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dashconf::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        settings: cli.settings,
        profile: cli.profile,
    };

    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Properties(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::AppInfo(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
