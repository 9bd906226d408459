//! Property resolution.
//!
//! A property's effective value is the first of:
//!
//! 1. the first set environment variable among the property's names, passed
//!    through its value mapper (environment-overridable properties only);
//! 2. the entry in the active profile's mapping, if the key is present, even
//!    when it is null;
//! 3. the entry in the root mapping;
//! 4. the property's default.
//!
//! Values that come from the tree or the registry are borrowed, so repeated
//! lookups of a default hand back the same instance.

use std::borrow::Cow;
use std::fmt;

use crate::config::ConfigurationTree;
use crate::env::EnvSource;
use crate::error::Result;
use crate::profile::ProfileId;
use crate::property::{PropertyDescriptor, PropertyRegistry};
use crate::value::Value;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// An environment variable, by name.
    Environment(String),
    /// The active profile's mapping.
    Profile(ProfileId),
    /// The root mapping.
    Root,
    /// The descriptor's default value.
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(var) => write!(f, "env:{var}"),
            Self::Profile(id) => write!(f, "profile:{id}"),
            Self::Root => write!(f, "root"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved value together with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// The effective value.
    pub value: Cow<'a, Value>,
    /// The layer that supplied it.
    pub source: ValueSource,
}

/// Resolves properties against a registry, a configuration tree and an
/// environment.
///
/// # Examples
///
/// ```
/// use dashconf::env::MapEnv;
/// use dashconf::{ConfigurationTree, ProfileId, PropertyRegistry, Resolver};
///
/// let registry = PropertyRegistry::dashboard().unwrap();
/// let tree = ConfigurationTree::from_yaml_str(
///     "dashboard_title: Root\nprofiles:\n  team1:\n    dashboard_title: Team\n",
/// )
/// .unwrap();
/// let env = MapEnv::new();
/// let resolver = Resolver::new(&registry, &tree, &env);
///
/// let team1 = ProfileId::new("team1");
/// assert_eq!(resolver.resolve("dashboard_title", Some(&team1)).unwrap().as_str(), Some("Team"));
/// assert_eq!(resolver.resolve("dashboard_title", None).unwrap().as_str(), Some("Root"));
/// ```
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a PropertyRegistry,
    tree: &'a ConfigurationTree,
    env: &'a dyn EnvSource,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over borrowed inputs.
    #[must_use]
    pub fn new(
        registry: &'a PropertyRegistry,
        tree: &'a ConfigurationTree,
        env: &'a dyn EnvSource,
    ) -> Self {
        Self {
            registry,
            tree,
            env,
        }
    }

    /// The registry this resolver consults.
    #[must_use]
    pub fn registry(&self) -> &'a PropertyRegistry {
        self.registry
    }

    /// The configuration tree this resolver consults.
    #[must_use]
    pub fn tree(&self) -> &'a ConfigurationTree {
        self.tree
    }

    /// The environment this resolver consults.
    #[must_use]
    pub fn env(&self) -> &'a dyn EnvSource {
        self.env
    }

    /// Resolves a registered property.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`](crate::Error::NotRegistered) for an
    /// unknown name and [`Error::ValueMapping`](crate::Error::ValueMapping)
    /// when the environment holds a value the property's mapper rejects.
    pub fn resolve(&self, name: &str, profile: Option<&ProfileId>) -> Result<Cow<'a, Value>> {
        self.resolve_with_source(name, profile).map(|r| r.value)
    }

    /// Resolves a registered property and reports which layer answered.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve`].
    pub fn resolve_with_source(
        &self,
        name: &str,
        profile: Option<&ProfileId>,
    ) -> Result<Resolution<'a>> {
        let property = self.registry.get(name)?;
        self.resolve_property(property, profile)
    }

    /// Resolves every registered property, in registry order.
    ///
    /// # Errors
    ///
    /// Returns the first mapping error encountered.
    pub fn resolve_all(
        &self,
        profile: Option<&ProfileId>,
    ) -> Result<Vec<(&'a str, Resolution<'a>)>> {
        self.registry
            .iter()
            .map(|property| {
                self.resolve_property(property, profile)
                    .map(|resolution| (property.name(), resolution))
            })
            .collect()
    }

    /// Looks `key` up in the profile mapping, then the root mapping.
    ///
    /// A key present in the profile mapping wins even when its value is null.
    /// Returns `None` when neither layer has the key.
    #[must_use]
    pub fn fetch(&self, key: &str, profile: Option<&ProfileId>) -> Option<&'a Value> {
        self.fetch_with_source(key, profile).map(|(value, _)| value)
    }

    /// Like [`Resolver::fetch`] but falls back to `default`.
    #[must_use]
    pub fn fetch_or<'d>(
        &self,
        key: &str,
        profile: Option<&ProfileId>,
        default: &'d Value,
    ) -> &'d Value
    where
        'a: 'd,
    {
        self.fetch(key, profile).unwrap_or(default)
    }

    fn fetch_with_source(
        &self,
        key: &str,
        profile: Option<&ProfileId>,
    ) -> Option<(&'a Value, ValueSource)> {
        if let Some(id) = profile {
            if let Some(value) = self.tree.profile(id).and_then(|section| section.get(key)) {
                return Some((value, ValueSource::Profile(id.clone())));
            }
        }

        self.tree
            .root_value(key)
            .map(|value| (value, ValueSource::Root))
    }

    fn resolve_property(
        &self,
        property: &'a PropertyDescriptor,
        profile: Option<&ProfileId>,
    ) -> Result<Resolution<'a>> {
        if property.reads_from_environment() {
            if let Some((variable, raw)) = self.env.first_set(property.environment_names()) {
                log::debug!("{} taken from {variable}", property.name());
                let value = property.mapper().map(property.name(), variable, &raw)?;
                return Ok(Resolution {
                    value: Cow::Owned(value),
                    source: ValueSource::Environment(variable.to_string()),
                });
            }
        }

        let resolution = match self.fetch_with_source(property.name(), profile) {
            Some((value, source)) => Resolution {
                value: Cow::Borrowed(value),
                source,
            },
            None => Resolution {
                value: Cow::Borrowed(property.default()),
                source: ValueSource::Default,
            },
        };
        Ok(resolution)
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests;
