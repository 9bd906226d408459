//! Profile identifiers and per-user settings.
//!
//! The active profile comes from the user's settings document, which the
//! session layer owns. This module only models the part of it that selects a
//! configuration profile.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{scalar_to_string, Value};

/// Identifier of a configuration profile.
///
/// Profile identifiers are opaque: they are compared exactly and are never
/// normalized.
///
/// # Examples
///
/// ```
/// use dashconf::ProfileId;
///
/// let profile = ProfileId::new("team1");
/// assert_eq!(profile.as_str(), "team1");
/// assert_eq!(profile.to_string(), "team1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Creates a profile identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user's settings document.
///
/// Only `profile` is interpreted; every other entry is kept so the document
/// can be written back untouched.
///
/// # Examples
///
/// ```
/// use dashconf::{ProfileId, UserSettings};
///
/// let settings = UserSettings::from_yaml_str("profile: team1\nother: 1\n").unwrap();
/// assert_eq!(settings.profile(), Some(ProfileId::new("team1")));
///
/// let empty = UserSettings::default();
/// assert_eq!(empty.profile(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Value>,

    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl UserSettings {
    /// Settings that select `profile`.
    #[must_use]
    pub fn with_profile(profile: impl Into<String>) -> Self {
        Self {
            profile: Some(Value::String(profile.into())),
            extra: BTreeMap::new(),
        }
    }

    /// Parses a settings document.
    ///
    /// An empty document yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `contents` is not valid YAML or is not a mapping.
    pub fn from_yaml_str(contents: &str) -> crate::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// The selected profile.
    ///
    /// Numeric entries and `true` are read by their YAML spelling; null,
    /// `false` or structured entries select no profile.
    #[must_use]
    pub fn profile(&self) -> Option<ProfileId> {
        match self.profile.as_ref()? {
            Value::Bool(false) => None,
            value => scalar_to_string(value).map(ProfileId::from),
        }
    }

    /// Any setting other than `profile`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
