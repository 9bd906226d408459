//! Command to print the property registry.

use crate::error::CliError;
use crate::utils::{render_inline, GlobalOptions};
use clap::{Args, ValueEnum};
use dashconf::value::to_json;
use dashconf::{PropertyDescriptor, PropertyRegistry};
use std::io::Write;

/// Print the property registry.
#[derive(Args)]
pub struct PropertiesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: RegistryFormat,
}

/// Output format for the properties command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RegistryFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl PropertiesCommand {
    /// Execute the properties command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let registry = PropertyRegistry::dashboard()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            RegistryFormat::Table => {
                writeln!(handle, "NAME\tDEFAULT\tMAPPER\tENVIRONMENT")?;
                for descriptor in &registry {
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}",
                        descriptor.name(),
                        render_inline(descriptor.default()),
                        descriptor.mapper(),
                        env_column(descriptor),
                    )?;
                }
            }
            RegistryFormat::Json => {
                let json_data: Vec<serde_json::Value> = registry
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "name": d.name(),
                            "default": to_json(d.default()),
                            "mapper": d.mapper().to_string(),
                            "read_from_environment": d.reads_from_environment(),
                            "environment_variable_names": d.environment_names(),
                        })
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut handle, &json_data)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

/// Comma-separated environment names, or `-` when overrides are off.
fn env_column(descriptor: &PropertyDescriptor) -> String {
    if descriptor.reads_from_environment() {
        descriptor.environment_names().join(",")
    } else {
        "-".to_string()
    }
}
