//! Utility functions for CLI operations.
//!
//! This module provides the loading steps shared across commands: the
//! configuration document, the user's settings and the active profile, plus
//! value rendering for output.

use crate::error::CliError;
use dashconf::config::ConfigLoader;
use dashconf::value::to_json;
use dashconf::{ConfigurationTree, ProfileId, UserSettings, Value};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration document to resolve against.
    pub config: Option<PathBuf>,

    /// User settings file.
    pub settings: Option<PathBuf>,

    /// Explicit profile, overriding the settings file.
    pub profile: Option<String>,
}

/// Load the configuration tree.
///
/// Without `--config` the tree is empty, so every property resolves from the
/// environment or its default.
pub fn load_tree(global: &GlobalOptions) -> Result<ConfigurationTree, CliError> {
    match &global.config {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            Ok(ConfigLoader::load_file(path)?)
        }
        None => {
            log::debug!("no configuration document given, using an empty tree");
            Ok(ConfigurationTree::default())
        }
    }
}

/// Load the user settings from `--settings`, or the default per-user path.
pub fn load_settings(global: &GlobalOptions) -> Result<UserSettings, CliError> {
    let path = match &global.settings {
        Some(path) => path.clone(),
        None => match ConfigLoader::default_settings_path() {
            Some(path) => path,
            None => {
                log::debug!("home directory unknown, no user settings");
                return Ok(UserSettings::default());
            }
        },
    };
    Ok(ConfigLoader::load_settings(&path)?)
}

/// Determine the active profile.
///
/// `--profile` wins; otherwise the settings file's `profile` entry is used.
pub fn resolve_profile(global: &GlobalOptions) -> Result<Option<ProfileId>, CliError> {
    if let Some(profile) = &global.profile {
        return Ok(Some(ProfileId::new(profile.clone())));
    }
    Ok(load_settings(global)?.profile())
}

/// Render a value on one line.
///
/// Strings are printed bare, null as `~`, everything else as compact JSON.
pub fn render_inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "~".to_string(),
        other => to_json(other).to_string(),
    }
}

/// Reject paths that do not exist with an argument error.
pub fn require_file(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_inline() {
        assert_eq!(render_inline(&Value::from("/public")), "/public");
        assert_eq!(render_inline(&Value::Null), "~");
        assert_eq!(render_inline(&Value::from(6)), "6");
        assert_eq!(render_inline(&Value::Bool(true)), "true");
        assert_eq!(
            render_inline(&Value::Sequence(vec![Value::from("a"), Value::from("b")])),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_profile_flag_overrides_settings() {
        let dir = tempdir().unwrap();
        let settings = dir.path().join("settings.yml");
        fs::write(&settings, "profile: team1\n").unwrap();

        let mut global = GlobalOptions {
            settings: Some(settings),
            ..GlobalOptions::default()
        };
        assert_eq!(
            resolve_profile(&global).unwrap(),
            Some(ProfileId::new("team1"))
        );

        global.profile = Some("team2".to_string());
        assert_eq!(
            resolve_profile(&global).unwrap(),
            Some(ProfileId::new("team2"))
        );
    }

    #[test]
    fn test_missing_settings_means_no_profile() {
        let dir = tempdir().unwrap();
        let global = GlobalOptions {
            settings: Some(dir.path().join("absent.yml")),
            ..GlobalOptions::default()
        };
        assert_eq!(resolve_profile(&global).unwrap(), None);
    }

    #[test]
    fn test_load_tree_without_config_is_empty() {
        let tree = load_tree(&GlobalOptions::default()).unwrap();
        assert!(tree.root().is_empty());
    }

    #[test]
    fn test_require_file() {
        let dir = tempdir().unwrap();
        let err = require_file(&dir.path().join("nope.yml")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
