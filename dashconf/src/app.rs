//! Process-level dashboard settings read from the environment.
//!
//! Unlike [`UserConfiguration`](crate::UserConfiguration), these settings do
//! not vary per user. They are read once, when the host starts, from an
//! [`EnvSource`].

use std::path::{Path, PathBuf};

use crate::env::EnvSource;

/// Default configuration root of the dashboard app.
pub const DEFAULT_CONFIG_ROOT: &str = "/etc/ood/config/apps/dashboard";
/// Default portal name used to build per-user directories.
pub const DEFAULT_PORTAL: &str = "ondemand";

/// Environment-derived app settings.
///
/// # Examples
///
/// ```
/// use dashconf::env::MapEnv;
/// use dashconf::AppConfig;
/// use std::path::Path;
///
/// let env = MapEnv::new().with("OOD_APP_CONFIG_ROOT", "/srv/dashboard");
/// let app = AppConfig::from_env(&env);
/// assert_eq!(app.config_root(), Path::new("/srv/dashboard"));
/// assert_eq!(app.initializers_root(), Path::new("/srv/dashboard/initializers"));
/// assert!(!app.load_external_config());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    config_root: PathBuf,
    initializers_root: PathBuf,
    rails_env: String,
    load_external_config: bool,
    app_sharing_enabled: bool,
    app_development_requested: bool,
    portal: String,
    dataroot: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the app settings from `env`.
    #[must_use]
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let config_root = env
            .var("OOD_APP_CONFIG_ROOT")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_ROOT), PathBuf::from);
        let initializers_root = env
            .var("OOD_APP_INITIALIZERS_ROOT")
            .map_or_else(|| config_root.join("initializers"), PathBuf::from);
        let rails_env = env
            .var("RAILS_ENV")
            .unwrap_or_else(|| "development".to_string());
        let load_external_config =
            env.var("OOD_LOAD_EXTERNAL_CONFIG").is_some() || rails_env == "production";
        let portal = env
            .var("OOD_PORTAL")
            .unwrap_or_else(|| DEFAULT_PORTAL.to_string());

        let dataroot = env
            .var("OOD_DATAROOT")
            .or_else(|| env.var("RAILS_DATAROOT"))
            .map(PathBuf::from)
            .or_else(|| {
                env.var("APP_TOKEN")
                    .map(|token| home_relative(&portal).join("data").join(token))
            });

        Self {
            config_root,
            initializers_root,
            load_external_config,
            app_sharing_enabled: is_present(env.var("OOD_APP_SHARING")),
            app_development_requested: is_present(env.var("OOD_APP_DEVELOPMENT")),
            rails_env,
            portal,
            dataroot,
        }
    }

    /// The app's configuration root directory.
    #[must_use]
    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    /// Directory of site initializers.
    #[must_use]
    pub fn initializers_root(&self) -> &Path {
        &self.initializers_root
    }

    /// The host environment name: development, test or production.
    #[must_use]
    pub fn rails_env(&self) -> &str {
        &self.rails_env
    }

    /// Whether configuration outside the app directory should be loaded.
    ///
    /// True when `OOD_LOAD_EXTERNAL_CONFIG` is set to anything, or in production.
    #[must_use]
    pub fn load_external_config(&self) -> bool {
        self.load_external_config
    }

    /// Whether app sharing is enabled.
    #[must_use]
    pub fn app_sharing_enabled(&self) -> bool {
        self.app_sharing_enabled
    }

    /// Whether app development is enabled.
    ///
    /// Enabled by a non-blank `OOD_APP_DEVELOPMENT`, or when the user's
    /// development directory already exists.
    #[must_use]
    pub fn app_development_enabled(&self) -> bool {
        self.app_development_requested || self.dev_root().exists()
    }

    /// The user's app development directory, `~/<portal>/dev`.
    #[must_use]
    pub fn dev_root(&self) -> PathBuf {
        home_relative(&self.portal).join("dev")
    }

    /// The per-user data root, if one is configured or derivable.
    #[must_use]
    pub fn dataroot(&self) -> Option<&Path> {
        self.dataroot.as_deref()
    }
}

/// Set, and not only whitespace.
fn is_present(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// `~/<dir>`, with `~` expanded when the home directory is known.
fn home_relative(dir: &str) -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_defaults() {
        let app = AppConfig::from_env(&MapEnv::new());
        assert_eq!(app.config_root(), Path::new(DEFAULT_CONFIG_ROOT));
        assert_eq!(
            app.initializers_root(),
            Path::new("/etc/ood/config/apps/dashboard/initializers")
        );
        assert_eq!(app.rails_env(), "development");
        assert!(!app.load_external_config());
        assert!(!app.app_sharing_enabled());
        assert_eq!(app.dataroot(), None);
    }

    #[test]
    fn test_explicit_initializers_root() {
        let env = MapEnv::new().with("OOD_APP_INITIALIZERS_ROOT", "/opt/init");
        let app = AppConfig::from_env(&env);
        assert_eq!(app.initializers_root(), Path::new("/opt/init"));
    }

    #[test]
    fn test_production_loads_external_config() {
        let env = MapEnv::new().with("RAILS_ENV", "production");
        assert!(AppConfig::from_env(&env).load_external_config());

        let env = MapEnv::new().with("OOD_LOAD_EXTERNAL_CONFIG", "");
        assert!(AppConfig::from_env(&env).load_external_config());
    }

    #[test]
    fn test_app_sharing_requires_non_blank() {
        let env = MapEnv::new().with("OOD_APP_SHARING", "1");
        assert!(AppConfig::from_env(&env).app_sharing_enabled());

        let env = MapEnv::new().with("OOD_APP_SHARING", "  ");
        assert!(!AppConfig::from_env(&env).app_sharing_enabled());
    }

    #[test]
    fn test_app_development_from_env() {
        let env = MapEnv::new().with("OOD_APP_DEVELOPMENT", "true");
        assert!(AppConfig::from_env(&env).app_development_enabled());
    }

    #[test]
    fn test_dataroot_precedence() {
        let env = MapEnv::new()
            .with("OOD_DATAROOT", "/data/ood")
            .with("RAILS_DATAROOT", "/data/rails")
            .with("APP_TOKEN", "sys/dashboard");
        assert_eq!(
            AppConfig::from_env(&env).dataroot(),
            Some(Path::new("/data/ood"))
        );

        let env = MapEnv::new().with("RAILS_DATAROOT", "/data/rails");
        assert_eq!(
            AppConfig::from_env(&env).dataroot(),
            Some(Path::new("/data/rails"))
        );
    }

    #[test]
    fn test_dataroot_from_app_token() {
        let env = MapEnv::new()
            .with("APP_TOKEN", "sys/dashboard")
            .with("OOD_PORTAL", "myportal");
        let app = AppConfig::from_env(&env);
        let dataroot = app.dataroot().unwrap();
        assert!(dataroot.ends_with("myportal/data/sys/dashboard"));
        assert!(app.dev_root().ends_with("myportal/dev"));
    }
}
