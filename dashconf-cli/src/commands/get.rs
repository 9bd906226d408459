//! Get command implementation.
//!
//! Prints the value one property resolves to for the active profile.

use crate::error::CliError;
use crate::utils::{load_tree, render_inline, resolve_profile, GlobalOptions};
use clap::Args;
use dashconf::{DerivedProperty, ProcessEnv, PropertyRegistry, UserConfiguration};

/// Print the resolved value of one property.
#[derive(Args)]
pub struct GetCommand {
    /// Property name, registered or derived (navbar_type, pinned_apps_group_by, public_url)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Fail on environment values the property cannot map instead of using its default
    #[arg(long)]
    pub strict: bool,

    /// Also print where the value came from
    #[arg(long)]
    pub show_source: bool,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let registry = PropertyRegistry::dashboard()?;
        let tree = load_tree(global)?;
        let profile = resolve_profile(global)?;
        let config = UserConfiguration::with_profile(&registry, &tree, &ProcessEnv, profile);

        if let Some(derived) = DerivedProperty::from_name(&self.name) {
            let value = config.derived(derived);
            if self.show_source {
                println!("{}\tderived", render_inline(&value));
            } else {
                println!("{}", render_inline(&value));
            }
            return Ok(());
        }

        if self.show_source || self.strict {
            let resolution = match config
                .resolver()
                .resolve_with_source(&self.name, config.profile())
            {
                Err(e) if e.is_value_mapping() && !self.strict => {
                    log::warn!("{e}, using default");
                    let value = registry.get(&self.name)?.default();
                    println!("{}\tdefault", render_inline(value));
                    return Ok(());
                }
                other => other?,
            };
            if self.show_source {
                println!(
                    "{}\t{}",
                    render_inline(&resolution.value),
                    resolution.source
                );
            } else {
                println!("{}", render_inline(&resolution.value));
            }
            return Ok(());
        }

        let value = config.value(&self.name)?;
        println!("{}", render_inline(&value));
        Ok(())
    }
}
