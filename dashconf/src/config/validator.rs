//! Configuration validation.
//!
//! Resolution itself is lenient: a malformed `profiles` section is treated as
//! empty. The validator is where operators find out about such problems
//! before users do.

use std::fmt;

use crate::config::tree::{ConfigurationTree, PROFILES_KEY};
use crate::error::{Error, Result};
use crate::property::{PropertyRegistry, ValueMapper};
use crate::user_config::{DerivedProperty, NavbarType};
use crate::value::{type_name, Mapping, Value};

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dotted path of the offending entry, e.g. `profiles.team1.navbar_type`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates configuration trees against a property registry.
///
/// # Examples
///
/// ```
/// use dashconf::config::{ConfigValidator, ConfigurationTree};
/// use dashconf::PropertyRegistry;
///
/// let registry = PropertyRegistry::dashboard().unwrap();
/// let tree = ConfigurationTree::from_yaml_str("dashboard_title: Portal\n").unwrap();
/// let warnings = ConfigValidator::validate(&tree, &registry).unwrap();
/// assert!(warnings.is_empty());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration tree.
    ///
    /// Unknown keys and suspicious values are reported as warnings, since the
    /// same document usually carries settings for other components.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `profiles`, or one of its entries, is
    /// neither a mapping nor null.
    pub fn validate(
        tree: &ConfigurationTree,
        registry: &PropertyRegistry,
    ) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        Self::validate_section(tree.root(), "", registry, &mut warnings);

        match tree.profiles_value() {
            None | Some(Value::Null) => {}
            Some(Value::Mapping(profiles)) => {
                for (id, section) in profiles {
                    let id = match id.as_str() {
                        Some(id) => id,
                        None => {
                            warnings.push(ValidationWarning {
                                field: PROFILES_KEY.into(),
                                message: format!(
                                    "profile key of type {} can never be selected",
                                    type_name(id)
                                ),
                            });
                            continue;
                        }
                    };
                    let prefix = format!("{PROFILES_KEY}.{id}.");
                    match section {
                        Value::Null => {}
                        Value::Mapping(section) => {
                            Self::validate_section(section, &prefix, registry, &mut warnings);
                        }
                        other => {
                            return Err(Error::Validation {
                                field: format!("{PROFILES_KEY}.{id}"),
                                message: format!(
                                    "profile must be a mapping, found {}",
                                    type_name(other)
                                ),
                            })
                        }
                    }
                }
            }
            Some(other) => {
                return Err(Error::Validation {
                    field: PROFILES_KEY.into(),
                    message: format!("must be a mapping of profiles, found {}", type_name(other)),
                })
            }
        }

        Ok(warnings)
    }

    /// Validate one flat section (the root, or a profile).
    fn validate_section(
        section: &Mapping,
        prefix: &str,
        registry: &PropertyRegistry,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        for (key, value) in section {
            let Some(key) = key.as_str() else {
                warnings.push(ValidationWarning {
                    field: prefix.trim_end_matches('.').to_string(),
                    message: format!("ignoring key of type {}", type_name(key)),
                });
                continue;
            };
            if prefix.is_empty() && key == PROFILES_KEY {
                continue;
            }

            let field = format!("{prefix}{key}");
            if let Some(message) = Self::check_value(key, value, registry) {
                warnings.push(ValidationWarning { field, message });
            }
        }
    }

    /// Returns a warning message for a suspicious `key: value` entry.
    fn check_value(key: &str, value: &Value, registry: &PropertyRegistry) -> Option<String> {
        if let Some(derived) = DerivedProperty::from_name(key) {
            return Self::check_derived(derived, value);
        }

        let Ok(property) = registry.get(key) else {
            return Some("not a dashboard property".to_string());
        };

        if value.is_null() {
            return None;
        }

        if property.mapper() == ValueMapper::Boolean && !value.is_bool() {
            return Some(format!("expected a boolean, found {}", type_name(value)));
        }

        let default = property.default();
        if default.is_sequence() && !value.is_sequence() {
            return Some(format!("expected a list, found {}", type_name(value)));
        }
        if default.is_number() && !value.is_number() {
            return Some(format!("expected a number, found {}", type_name(value)));
        }

        None
    }

    fn check_derived(derived: DerivedProperty, value: &Value) -> Option<String> {
        match derived {
            DerivedProperty::NavbarType => match value.as_str() {
                Some("inverse" | "dark" | "default" | "light") => None,
                _ => Some(format!(
                    "unrecognized navbar type {value:?}, {} will be used",
                    NavbarType::Dark
                )),
            },
            DerivedProperty::PublicUrl => match value.as_str() {
                Some(path) if path.starts_with('/') => None,
                _ => Some("must be a root-relative path; /public will be used".to_string()),
            },
            DerivedProperty::PinnedAppsGroupBy => {
                if value.is_null() || value.is_string() {
                    None
                } else {
                    Some(format!("expected a string, found {}", type_name(value)))
                }
            }
        }
    }
}
