//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use dashconf::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Semantic failure (e.g., validation failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., validation failed, unmappable value)
    /// - 4: Invalid arguments (including unknown property names)
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::ValueMapping { .. } => 1,
                LibError::NotRegistered { .. } => 4,
                LibError::Io(_) => 5,
                LibError::InvalidPath { .. }
                | LibError::Validation { .. }
                | LibError::Configuration(_) => 7,
                LibError::DuplicateProperty { .. } => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);

        let not_registered = CliError::from(LibError::NotRegistered { name: "x".into() });
        assert_eq!(not_registered.exit_code(), 4);

        let mapping = CliError::from(LibError::ValueMapping {
            property: "disable_dashboard_logo".into(),
            variable: "DISABLE_DASHBOARD_LOGO".into(),
            value: "kinda".into(),
        });
        assert_eq!(mapping.exit_code(), 1);

        let bad_path = CliError::from(LibError::InvalidPath {
            path: PathBuf::from("/nope"),
            reason: "missing".into(),
        });
        assert_eq!(bad_path.exit_code(), 7);

        let duplicate = CliError::from(LibError::DuplicateProperty { name: "x".into() });
        assert_eq!(duplicate.exit_code(), 6);
    }

    #[test]
    fn test_display() {
        let err = CliError::InvalidArguments("unknown format".into());
        assert_eq!(err.to_string(), "Invalid arguments: unknown format");
    }
}
