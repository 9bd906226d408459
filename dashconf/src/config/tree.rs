//! The in-memory configuration tree.

use crate::error::{Error, Result};
use crate::profile::ProfileId;
use crate::value::{type_name, Mapping, Value};

/// Key of the sub-mapping that holds per-profile overrides.
pub const PROFILES_KEY: &str = "profiles";

/// A parsed configuration document.
///
/// The root is a flat mapping of property name to value. The optional
/// `profiles` entry maps profile identifiers to mappings of the same shape.
///
/// ```yaml
/// dashboard_logo: "/public/ood.png"
/// profiles:
///   team1:
///     dashboard_logo: "/public/team1.png"
/// ```
///
/// # Examples
///
/// ```
/// use dashconf::{ConfigurationTree, ProfileId};
///
/// let tree = ConfigurationTree::from_yaml_str(
///     "dashboard_logo: /public/ood.png\nprofiles:\n  team1:\n    dashboard_logo: /public/team1.png\n",
/// )
/// .unwrap();
///
/// assert!(tree.root_value("dashboard_logo").is_some());
/// assert!(tree.profile(&ProfileId::new("team1")).is_some());
/// assert!(tree.profile(&ProfileId::new("team2")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationTree {
    root: Mapping,
}

impl ConfigurationTree {
    /// Wraps an already-parsed root mapping.
    #[must_use]
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Builds a tree from a YAML value.
    ///
    /// A null document is an empty tree.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the document is not a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Mapping(root) => Ok(Self::new(root)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::Validation {
                field: "<root>".into(),
                message: format!(
                    "configuration must be a mapping, found {}",
                    type_name(&other)
                ),
            }),
        }
    }

    /// Parses a YAML document into a tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or is not a mapping.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_value(serde_yaml::from_str(contents)?)
    }

    /// The root mapping.
    #[must_use]
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// A root-level entry.
    #[must_use]
    pub fn root_value(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The raw `profiles` entry, whatever its shape.
    #[must_use]
    pub fn profiles_value(&self) -> Option<&Value> {
        self.root.get(PROFILES_KEY)
    }

    /// The override mapping for `profile`.
    ///
    /// Returns `None` when there is no `profiles` mapping, when the profile is
    /// unknown, or when its entry is not a mapping.
    #[must_use]
    pub fn profile(&self, profile: &ProfileId) -> Option<&Mapping> {
        self.profiles_value()?
            .as_mapping()?
            .get(profile.as_str())?
            .as_mapping()
    }

    /// Identifiers of the profiles declared in the tree, in document order.
    #[must_use]
    pub fn profile_ids(&self) -> Vec<ProfileId> {
        self.profiles_value()
            .and_then(Value::as_mapping)
            .map(|profiles| {
                profiles
                    .keys()
                    .filter_map(|k| k.as_str().map(ProfileId::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<Mapping> for ConfigurationTree {
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}
