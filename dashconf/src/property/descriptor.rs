//! Property descriptors.

use crate::property::mapper::ValueMapper;
use crate::value::Value;

/// Prefix of the environment variable name derived from a property name.
pub const DERIVED_ENV_PREFIX: &str = "OOD_";

/// Describes one configurable property.
///
/// Descriptors are built with a small chaining API and are immutable once
/// handed to a [`PropertyRegistry`](crate::property::PropertyRegistry).
///
/// # Examples
///
/// ```
/// use dashconf::property::{PropertyDescriptor, ValueMapper};
/// use dashconf::value::Value;
///
/// let logo = PropertyDescriptor::new("dashboard_logo").read_from_env();
/// assert_eq!(logo.environment_names(), ["OOD_DASHBOARD_LOGO"]);
///
/// let disable = PropertyDescriptor::boolean("disable_dashboard_logo")
///     .default_value(false)
///     .env_names(["OOD_DISABLE_DASHBOARD_LOGO", "DISABLE_DASHBOARD_LOGO"]);
/// assert_eq!(disable.mapper(), ValueMapper::Boolean);
/// assert_eq!(disable.default(), &Value::Bool(false));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    name: String,
    default_value: Value,
    read_from_environment: bool,
    environment_names: Vec<String>,
    mapper: ValueMapper,
}

impl PropertyDescriptor {
    /// Creates a property with a null default that ignores the environment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: Value::Null,
            read_from_environment: false,
            environment_names: Vec::new(),
            mapper: ValueMapper::Identity,
        }
    }

    /// Creates a property whose environment values go through the boolean mapper.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name).mapper_with(ValueMapper::Boolean)
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Allows environment overrides through the derived variable name.
    #[must_use]
    pub fn read_from_env(mut self) -> Self {
        self.read_from_environment = true;
        if self.environment_names.is_empty() {
            self.environment_names.push(derived_env_name(&self.name));
        }
        self
    }

    /// Allows environment overrides through `names`, checked in order.
    ///
    /// An empty list falls back to the derived name.
    #[must_use]
    pub fn env_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environment_names = names.into_iter().map(Into::into).collect();
        self.read_from_env()
    }

    /// Sets the value mapper.
    #[must_use]
    pub fn mapper_with(mut self, mapper: ValueMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, `Value::Null` when the property has none.
    #[must_use]
    pub fn default(&self) -> &Value {
        &self.default_value
    }

    /// Whether environment variables may override this property.
    #[must_use]
    pub fn reads_from_environment(&self) -> bool {
        self.read_from_environment
    }

    /// Environment variable names in priority order.
    ///
    /// Empty when the property does not read from the environment.
    #[must_use]
    pub fn environment_names(&self) -> &[String] {
        &self.environment_names
    }

    /// The value mapper applied to environment values.
    #[must_use]
    pub fn mapper(&self) -> ValueMapper {
        self.mapper
    }
}

/// Derives the environment variable name for a property.
///
/// # Examples
///
/// ```
/// use dashconf::property::derived_env_name;
///
/// assert_eq!(derived_env_name("dashboard_title"), "OOD_DASHBOARD_TITLE");
/// ```
#[must_use]
pub fn derived_env_name(property: &str) -> String {
    format!("{DERIVED_ENV_PREFIX}{}", property.to_uppercase())
}
