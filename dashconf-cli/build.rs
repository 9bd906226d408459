//! Build script for dashconf-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("dashconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect dashboard configuration resolution")
        .long_about(
            "Show how dashboard properties resolve from the environment, the active \
             profile, the root configuration and their defaults",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration document to resolve against")
                .value_name("PATH")
                .global(true)
                .env("DASHCONF_CONFIG"),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .help("User settings file the active profile is read from")
                .value_name("PATH")
                .global(true)
                .env("DASHCONF_SETTINGS"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("Profile to resolve for (overrides the settings file)")
                .value_name("ID")
                .global(true),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Print the resolved value of one property")
                .long_about("Resolve a registered or derived property for the active profile"),
            Command::new("list")
                .about("Print every property with its resolved value")
                .long_about("Resolve all properties and show where each value came from"),
            Command::new("properties")
                .about("Print the property registry")
                .long_about("Show each property's default, value mapper and environment names"),
            Command::new("validate")
                .about("Validate a configuration document")
                .long_about("Check the shape of a configuration document and its profiles"),
            Command::new("app-info")
                .about("Print the environment-derived app settings")
                .long_about("Show the dashboard app settings read from the process environment"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dashconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
