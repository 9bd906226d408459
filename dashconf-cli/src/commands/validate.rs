//! Command to validate a dashboard configuration document.

use crate::error::CliError;
use crate::utils::{require_file, GlobalOptions};
use clap::Args;
use dashconf::config::{ConfigLoader, ConfigValidator};
use dashconf::PropertyRegistry;
use std::path::PathBuf;

/// Validate a configuration document.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        require_file(&self.config_path)?;

        let tree = match ConfigLoader::load_file(&self.config_path) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        let registry = PropertyRegistry::dashboard()?;
        let warnings = match ConfigValidator::validate(&tree, &registry) {
            Ok(warnings) => warnings,
            Err(e) => {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ));
            }
        };

        for warning in &warnings {
            println!("warning: {warning}");
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "Configuration has {} warning(s)",
                warnings.len()
            )));
        }

        if !global.quiet {
            let profiles = tree.profile_ids().len();
            println!("Configuration is valid ({profiles} profile(s))");
        }
        Ok(())
    }
}
