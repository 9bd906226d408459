//! Command to print the environment-derived app settings.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dashconf::{AppConfig, ProcessEnv};
use std::io::Write;

/// Print the environment-derived app settings.
#[derive(Args)]
pub struct AppInfoCommand {
    /// Print JSON instead of `key: value` lines
    #[arg(long)]
    pub json: bool,
}

impl AppInfoCommand {
    /// Execute the app-info command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let app = AppConfig::from_env(&ProcessEnv);
        let dataroot = app.dataroot().map(|p| p.display().to_string());

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            let json = serde_json::json!({
                "config_root": app.config_root().display().to_string(),
                "initializers_root": app.initializers_root().display().to_string(),
                "rails_env": app.rails_env(),
                "load_external_config": app.load_external_config(),
                "app_sharing_enabled": app.app_sharing_enabled(),
                "app_development_enabled": app.app_development_enabled(),
                "dev_root": app.dev_root().display().to_string(),
                "dataroot": dataroot,
            });
            serde_json::to_writer_pretty(&mut handle, &json)?;
            writeln!(handle)?;
            return Ok(());
        }

        writeln!(handle, "config_root: {}", app.config_root().display())?;
        writeln!(
            handle,
            "initializers_root: {}",
            app.initializers_root().display()
        )?;
        writeln!(handle, "rails_env: {}", app.rails_env())?;
        writeln!(
            handle,
            "load_external_config: {}",
            app.load_external_config()
        )?;
        writeln!(handle, "app_sharing_enabled: {}", app.app_sharing_enabled())?;
        writeln!(
            handle,
            "app_development_enabled: {}",
            app.app_development_enabled()
        )?;
        writeln!(handle, "dev_root: {}", app.dev_root().display())?;
        writeln!(handle, "dataroot: {}", dataroot.as_deref().unwrap_or("~"))?;

        Ok(())
    }
}
