//! Error types for the dashconf library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`Error`] enum defined here using `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dashconf error.
///
/// # Examples
///
/// ```
/// use dashconf::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("dashboard_title")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dashconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// A property was requested that the registry does not know about.
    ///
    /// This indicates an integration bug rather than bad operator input.
    #[error("property '{name}' is not registered")]
    NotRegistered {
        /// The requested property name.
        name: String,
    },

    /// A raw value could not be converted by the property's value mapper.
    #[error("cannot map value '{value}' from {variable} for property '{property}'")]
    ValueMapping {
        /// The property whose mapper rejected the value.
        property: String,
        /// Where the raw value came from (usually an environment variable name).
        variable: String,
        /// The offending raw value.
        value: String,
    },

    /// Two descriptors with the same name were registered.
    #[error("property '{name}' is registered more than once")]
    DuplicateProperty {
        /// The duplicated property name.
        name: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a value mapping failure.
    ///
    /// Mapping failures are operator-facing: the environment or configuration
    /// holds a value the property cannot accept.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashconf::Error;
    ///
    /// let err = Error::ValueMapping {
    ///     property: "disable_dashboard_logo".into(),
    ///     variable: "OOD_DISABLE_DASHBOARD_LOGO".into(),
    ///     value: "maybe".into(),
    /// };
    /// assert!(err.is_value_mapping());
    /// ```
    #[must_use]
    pub fn is_value_mapping(&self) -> bool {
        matches!(self, Self::ValueMapping { .. })
    }

    /// Check if the error reports an unregistered property.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashconf::Error;
    ///
    /// let err = Error::NotRegistered { name: "nope".into() };
    /// assert!(err.is_not_registered());
    /// ```
    #[must_use]
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }
}
