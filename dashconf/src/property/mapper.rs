//! Value mappers applied to raw environment strings.

use std::fmt;

use crate::error::{Error, Result};
use crate::value::Value;

/// Transformation from a raw string to a configuration value.
///
/// Mappers are attached to a descriptor when it is registered; the resolver
/// never chooses one at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMapper {
    /// The raw string becomes a string value.
    #[default]
    Identity,
    /// The raw string is parsed as a boolean token.
    Boolean,
}

impl ValueMapper {
    /// Maps `raw`, read from `variable`, for `property`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueMapping`] if the mapper does not accept `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashconf::property::ValueMapper;
    /// use dashconf::value::Value;
    ///
    /// let v = ValueMapper::Boolean.map("disable_dashboard_logo", "OOD_DISABLE_DASHBOARD_LOGO", "yes").unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(ValueMapper::Boolean.map("disable_dashboard_logo", "OOD_DISABLE_DASHBOARD_LOGO", "maybe").is_err());
    /// ```
    pub fn map(self, property: &str, variable: &str, raw: &str) -> Result<Value> {
        match self {
            Self::Identity => Ok(Value::String(raw.to_string())),
            Self::Boolean => parse_bool(raw)
                .map(Value::Bool)
                .ok_or_else(|| Error::ValueMapping {
                    property: property.to_string(),
                    variable: variable.to_string(),
                    value: raw.to_string(),
                }),
        }
    }
}

impl fmt::Display for ValueMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Parses a boolean token.
///
/// Accepts true/1/yes/on/t for true and false/0/no/off/f or the empty string
/// for false, case-insensitively. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "" => Some(false),
        _ => None,
    }
}
