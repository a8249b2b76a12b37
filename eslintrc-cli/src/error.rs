//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use eslintrc::Error as LibError;
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

    /// Output could not be produced.
    Output(String),

    /// Semantic failure (e.g., validation failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., validation failed)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Invalid configuration
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err.root_cause() {
                LibError::ConfigParse { .. }
                | LibError::Validation { .. }
                | LibError::InvalidGlob { .. }
                | LibError::InvalidOverridePattern { .. }
                | LibError::ExtendConfigMissing { .. }
                | LibError::ExtendsPluginPath { .. }
                | LibError::CircularExtends { .. }
                | LibError::ExtendsDepthExceeded { .. } => 7,
                LibError::PermissionDenied { .. } | LibError::Io { .. } => 5,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Output(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Output(msg) => write!(f, "Failed to write output: {msg}"),
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
        if let LibError::ConfigNotFound { path } = &e {
            CliError::InvalidArguments(format!("File not found: {}", path.display()))
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_config_exit_code() {
        let err = CliError::from(LibError::Validation {
            source_name: ".eslintrc.json".into(),
            field: "rules.semi".into(),
            message: "has an invalid severity".into(),
        });
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_wrapped_extends_error_uses_root_cause() {
        let err = CliError::from(LibError::Extends {
            importer: ".eslintrc.json".into(),
            source: Box::new(LibError::CircularExtends {
                chain: vec!["a".into(), "b".into(), "a".into()],
            }),
        });
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_missing_file_is_invalid_argument() {
        let err = CliError::from(LibError::ConfigNotFound {
            path: PathBuf::from("/nope/.eslintrc.json"),
        });
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("/nope/.eslintrc.json"));
    }

    #[test]
    fn test_other_library_errors() {
        let err = CliError::from(LibError::UnsupportedModule {
            path: PathBuf::from("/p/.eslintrc.js"),
        });
        assert_eq!(err.exit_code(), 6);
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
    }
}
