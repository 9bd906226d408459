//! Reading configuration and settings documents from disk.
//!
//! Only single, already-chosen files are read here. Deciding which files make
//! up the configuration, and in what order they merge, belongs to the host.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::tree::ConfigurationTree;
use crate::error::{Error, Result};
use crate::profile::UserSettings;

/// Default location of the user settings document, relative to `$HOME`.
pub const USER_SETTINGS_PATH: &str = ".config/ondemand/settings.yml";

/// Loads configuration documents.
///
/// # Examples
///
/// ```no_run
/// use dashconf::config::ConfigLoader;
/// use std::path::Path;
///
/// let tree = ConfigLoader::load_file(Path::new("/etc/ood/config/ondemand.d/ondemand.yml")).unwrap();
/// println!("{} profiles", tree.profile_ids().len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// the document is not a mapping.
    pub fn load_file(path: &Path) -> Result<ConfigurationTree> {
        let contents = read(path, "configuration file")?;

        ConfigurationTree::from_yaml_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid configuration: {e}"),
        })
    }

    /// Load a user settings file.
    ///
    /// A missing file means the user has no settings yet and yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            log::debug!("no user settings at {}", path.display());
            return Ok(UserSettings::default());
        }

        let contents = read(path, "settings file")?;

        UserSettings::from_yaml_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid settings: {e}"),
        })
    }

    /// The default user settings path, if the home directory is known.
    #[must_use]
    pub fn default_settings_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_SETTINGS_PATH))
    }
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read {what}: {e}"),
    })
}
