//! Per-user dashboard configuration.
//!
//! [`UserConfiguration`] is the object the presentation layer talks to. It is
//! built once per request from the shared registry, configuration tree and
//! environment plus the active user's profile, and exposes:
//!
//! - [`UserConfiguration::value`] for any registered property;
//! - a few named accessors whose values need post-processing.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigurationTree;
use crate::env::EnvSource;
use crate::error::{Error, Result};
use crate::profile::{ProfileId, UserSettings};
use crate::property::PropertyRegistry;
use crate::resolver::Resolver;
use crate::value::{scalar_to_string, Value};

/// Environment variable that overrides [`UserConfiguration::navbar_type`].
pub const NAVBAR_TYPE_ENV: &str = "OOD_NAVBAR_TYPE";
/// Environment variable that overrides [`UserConfiguration::pinned_apps_group_by`].
pub const PINNED_APPS_GROUP_BY_ENV: &str = "OOD_PINNED_APPS_GROUP_BY";
/// Environment variable that overrides [`UserConfiguration::public_url`].
pub const PUBLIC_URL_ENV: &str = "OOD_PUBLIC_URL";
/// Fallback for [`UserConfiguration::public_url`].
pub const DEFAULT_PUBLIC_URL: &str = "/public";

/// Bootstrap navbar colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarType {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl NavbarType {
    /// Normalizes a configured navbar type.
    ///
    /// `inverse` and `dark` mean dark, `default` and `light` mean light, and
    /// anything else, including no value, means dark.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashconf::NavbarType;
    ///
    /// assert_eq!(NavbarType::normalize(Some("inverse")), NavbarType::Dark);
    /// assert_eq!(NavbarType::normalize(Some("default")), NavbarType::Light);
    /// assert_eq!(NavbarType::normalize(Some("bogus")), NavbarType::Dark);
    /// assert_eq!(NavbarType::normalize(None), NavbarType::Dark);
    /// ```
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("default" | "light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The Bootstrap class suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for NavbarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties computed by dedicated accessors rather than plain resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedProperty {
    /// See [`UserConfiguration::navbar_type`].
    NavbarType,
    /// See [`UserConfiguration::pinned_apps_group_by`].
    PinnedAppsGroupBy,
    /// See [`UserConfiguration::public_url`].
    PublicUrl,
}

impl DerivedProperty {
    /// All derived properties.
    pub const ALL: [Self; 3] = [Self::NavbarType, Self::PinnedAppsGroupBy, Self::PublicUrl];

    /// The configuration key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NavbarType => "navbar_type",
            Self::PinnedAppsGroupBy => "pinned_apps_group_by",
            Self::PublicUrl => "public_url",
        }
    }

    /// The single environment variable that overrides it.
    #[must_use]
    pub fn env_name(self) -> &'static str {
        match self {
            Self::NavbarType => NAVBAR_TYPE_ENV,
            Self::PinnedAppsGroupBy => PINNED_APPS_GROUP_BY_ENV,
            Self::PublicUrl => PUBLIC_URL_ENV,
        }
    }

    /// Looks a derived property up by configuration key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Dashboard configuration as seen by one user.
///
/// # Examples
///
/// ```
/// use dashconf::env::MapEnv;
/// use dashconf::{ConfigurationTree, NavbarType, PropertyRegistry, UserConfiguration, UserSettings};
///
/// let registry = PropertyRegistry::dashboard().unwrap();
/// let tree = ConfigurationTree::from_yaml_str(
///     "navbar_type: light\nprofiles:\n  team1:\n    navbar_type: inverse\n",
/// )
/// .unwrap();
/// let env = MapEnv::new();
///
/// let settings = UserSettings::with_profile("team1");
/// let config = UserConfiguration::new(&registry, &tree, &env, &settings);
/// assert_eq!(config.navbar_type(), NavbarType::Dark);
///
/// let config = UserConfiguration::new(&registry, &tree, &env, &UserSettings::default());
/// assert_eq!(config.navbar_type(), NavbarType::Light);
/// ```
#[derive(Debug, Clone)]
pub struct UserConfiguration<'a> {
    resolver: Resolver<'a>,
    profile: Option<ProfileId>,
}

impl<'a> UserConfiguration<'a> {
    /// Creates the configuration for the user whose settings are `settings`.
    #[must_use]
    pub fn new(
        registry: &'a PropertyRegistry,
        tree: &'a ConfigurationTree,
        env: &'a dyn EnvSource,
        settings: &UserSettings,
    ) -> Self {
        Self::with_profile(registry, tree, env, settings.profile())
    }

    /// Creates the configuration for an explicitly chosen profile.
    #[must_use]
    pub fn with_profile(
        registry: &'a PropertyRegistry,
        tree: &'a ConfigurationTree,
        env: &'a dyn EnvSource,
        profile: Option<ProfileId>,
    ) -> Self {
        Self {
            resolver: Resolver::new(registry, tree, env),
            profile,
        }
    }

    /// The active profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&ProfileId> {
        self.profile.as_ref()
    }

    /// The underlying resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver<'a> {
        &self.resolver
    }

    /// Resolves a registered property, surfacing mapping errors.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn resolve(&self, name: &str) -> Result<Cow<'a, Value>> {
        self.resolver.resolve(name, self.profile())
    }

    /// Resolves a registered property for display.
    ///
    /// A value the property's mapper rejects is logged and replaced by the
    /// property's default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] for unknown names.
    pub fn value(&self, name: &str) -> Result<Cow<'a, Value>> {
        match self.resolve(name) {
            Err(Error::ValueMapping {
                property,
                variable,
                value,
            }) => {
                log::warn!(
                    "ignoring {variable}={value:?} for property '{property}': not a recognized value, using default"
                );
                let descriptor = self.resolver.registry().get(name)?;
                Ok(Cow::Borrowed(descriptor.default()))
            }
            other => other,
        }
    }

    /// The navbar colour scheme.
    #[must_use]
    pub fn navbar_type(&self) -> NavbarType {
        let raw = self.env_or_fetch(DerivedProperty::NavbarType, &Value::Null);
        NavbarType::normalize(raw.as_str())
    }

    /// The app attribute pinned apps are grouped by, or `""` for no grouping.
    ///
    /// `category` and `subcategory` are rewritten to `original_category` and
    /// `original_subcategory`: app catalogue entries overwrite those two
    /// fields with display values and keep the configured taxonomy under the
    /// `original_` names.
    #[must_use]
    pub fn pinned_apps_group_by(&self) -> String {
        let empty = Value::String(String::new());
        let raw = self.env_or_fetch(DerivedProperty::PinnedAppsGroupBy, &empty);
        let group_by = scalar_to_string(&raw).unwrap_or_default();

        match group_by.as_str() {
            "category" | "subcategory" => format!("original_{group_by}"),
            _ => group_by,
        }
    }

    /// URL path under which public assets are served.
    ///
    /// Only root-relative paths are honoured; anything else, such as a URL
    /// pointing at another host, yields `/public`.
    #[must_use]
    pub fn public_url(&self) -> PathBuf {
        let default = Value::String(DEFAULT_PUBLIC_URL.to_string());
        let raw = self.env_or_fetch(DerivedProperty::PublicUrl, &default);

        match raw.as_str() {
            Some(path) if path.starts_with('/') => PathBuf::from(path),
            _ => {
                log::debug!("public_url {raw:?} is not root-relative, using {DEFAULT_PUBLIC_URL}");
                PathBuf::from(DEFAULT_PUBLIC_URL)
            }
        }
    }

    /// The value of a derived property, as a plain value.
    #[must_use]
    pub fn derived(&self, property: DerivedProperty) -> Value {
        match property {
            DerivedProperty::NavbarType => Value::from(self.navbar_type().as_str()),
            DerivedProperty::PinnedAppsGroupBy => Value::from(self.pinned_apps_group_by()),
            DerivedProperty::PublicUrl => {
                Value::from(self.public_url().to_string_lossy().into_owned())
            }
        }
    }

    /// Looks up any property by name, registered or derived.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] if `name` is neither.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        match DerivedProperty::from_name(name) {
            Some(derived) => Ok(self.derived(derived)),
            None => self.value(name).map(Cow::into_owned),
        }
    }

    fn env_or_fetch<'d>(&self, property: DerivedProperty, default: &'d Value) -> Cow<'d, Value>
    where
        'a: 'd,
    {
        match self.resolver.env().var(property.env_name()) {
            Some(raw) => Cow::Owned(Value::String(raw)),
            None => Cow::Borrowed(
                self.resolver
                    .fetch_or(property.name(), self.profile(), default),
            ),
        }
    }
}
