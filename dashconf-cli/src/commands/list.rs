//! List command implementation.
//!
//! This module implements the `list` command, which displays every property
//! with its resolved value and source in various formats (table, YAML, JSON,
//! CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_tree, render_inline, resolve_profile, GlobalOptions};
use clap::{Args, ValueEnum};
use dashconf::value::{to_json, Mapping};
use dashconf::{
    DerivedProperty, ProcessEnv, PropertyRegistry, UserConfiguration, Value, ValueSource,
};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 3] = ["name", "value", "source"];

/// Source label for derived properties.
const DERIVED_SOURCE: &str = "derived";

/// Print every property with its resolved value.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "DASHCONF_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Leave out the derived properties
    #[arg(long)]
    pub registered_only: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// YAML mapping of name to value
    Yaml,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

/// One row of output.
struct Entry {
    name: String,
    value: Value,
    source: String,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let registry = PropertyRegistry::dashboard()?;
        let tree = load_tree(global)?;
        let profile = resolve_profile(global)?;
        let config = UserConfiguration::with_profile(&registry, &tree, &ProcessEnv, profile);

        let mut entries = collect_registered(&config)?;
        if !self.registered_only {
            entries.extend(DerivedProperty::ALL.into_iter().map(|derived| Entry {
                name: derived.name().to_string(),
                value: config.derived(derived),
                source: DERIVED_SOURCE.to_string(),
            }));
        }

        match self.format {
            OutputFormat::Table => format_as_table(&entries)?,
            OutputFormat::Yaml => format_as_yaml(&entries)?,
            OutputFormat::Json => format_as_json(&entries)?,
            OutputFormat::Csv => format_as_delimited(&entries, b',')?,
            OutputFormat::Tsv => format_as_delimited(&entries, b'\t')?,
        }

        Ok(())
    }
}

/// Resolve every registered property in registry order.
///
/// A value the property's mapper rejects is reported and replaced by the
/// default, as the dashboard itself would.
fn collect_registered(config: &UserConfiguration<'_>) -> Result<Vec<Entry>, CliError> {
    let resolver = config.resolver();
    let mut entries = Vec::with_capacity(resolver.registry().len());

    for descriptor in resolver.registry() {
        let name = descriptor.name();
        let (value, source) = match resolver.resolve_with_source(name, config.profile()) {
            Ok(resolution) => (resolution.value.into_owned(), resolution.source),
            Err(e) if e.is_value_mapping() => {
                log::warn!("{e}, using default");
                (descriptor.default().clone(), ValueSource::Default)
            }
            Err(e) => return Err(e.into()),
        };
        entries.push(Entry {
            name: name.to_string(),
            value,
            source: source.to_string(),
        });
    }

    Ok(entries)
}

/// Format entries as a human-readable table.
fn format_as_table(entries: &[Entry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for entry in entries {
        writeln!(
            handle,
            "{}\t{}\t{}",
            entry.name,
            render_inline(&entry.value),
            entry.source
        )?;
    }

    Ok(())
}

/// Format entries as a YAML mapping, in the shape of a configuration document.
fn format_as_yaml(entries: &[Entry]) -> Result<(), CliError> {
    let mapping: Mapping = entries
        .iter()
        .map(|e| (Value::from(e.name.clone()), e.value.clone()))
        .collect();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_yaml::to_writer(&mut handle, &Value::Mapping(mapping))?;

    Ok(())
}

/// Format entries as JSON.
fn format_as_json(entries: &[Entry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "value": to_json(&e.value),
                "source": e.source,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)?;
    writeln!(handle)?;

    Ok(())
}

/// Format entries as delimited output (CSV or TSV).
fn format_as_delimited(entries: &[Entry], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS)?;

    for entry in entries {
        let value = match &entry.value {
            Value::Null => String::new(),
            other => render_inline(other),
        };
        writer.write_record([entry.name.as_str(), value.as_str(), entry.source.as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
