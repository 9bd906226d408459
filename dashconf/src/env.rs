//! Environment variable sources.
//!
//! Resolution never touches `std::env` directly; it reads through an
//! [`EnvSource`] so hosts can pass the real process environment or a fixed
//! snapshot.

use std::collections::HashMap;
use std::env;

/// Read-only access to environment variables by exact name.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` if it is not set.
    ///
    /// A variable that is set to the empty string is still set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the first variable in `names` that is set, with its name.
    fn first_set<'n>(&self, names: &'n [String]) -> Option<(&'n str, String)> {
        names
            .iter()
            .find_map(|name| self.var(name).map(|value| (name.as_str(), value)))
    }
}

/// The process environment.
///
/// A variable that is set but not valid Unicode is still set; invalid
/// sequences are replaced with U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// An in-memory environment snapshot.
///
/// # Examples
///
/// ```
/// use dashconf::env::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("OOD_DASHBOARD_TITLE", "My Portal");
/// assert_eq!(env.var("OOD_DASHBOARD_TITLE").as_deref(), Some("My Portal"));
/// assert_eq!(env.var("OOD_DASHBOARD_LOGO"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Sets `name` to `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
