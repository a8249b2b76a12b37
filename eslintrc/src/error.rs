//! Error types for the eslintrc library.
//!
//! This module provides the error hierarchy for configuration loading and
//! resolution, using `thiserror` for ergonomic error handling. Every variant
//! carries a stable message template tag and structured data so tooling can
//! render diagnostics without parsing error text.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias for operations that may fail with an eslintrc error.
///
/// # Examples
///
/// ```
/// use eslintrc::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the eslintrc library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file exists but its content could not be parsed.
    #[error("cannot read config file {}: {message}", path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser message.
        message: String,
    },

    /// A configuration file does not exist.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// A package manifest was loaded explicitly but has no linting section.
    #[error("no \"eslintConfig\" field found in {}", path.display())]
    ConfigFieldNotFound {
        /// The package manifest.
        path: PathBuf,
    },

    /// Permission denied while reading a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A raw configuration object violates the configuration schema.
    #[error("configuration in {source_name} is invalid: '{field}' {message}")]
    Validation {
        /// Name of the configuration that failed validation.
        source_name: String,
        /// The offending key path.
        field: String,
        /// A description of the violation.
        message: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob {
        /// The pattern.
        pattern: String,
        /// The compiler message.
        message: String,
    },

    /// An override pattern is absolute or escapes its base directory.
    #[error("invalid override pattern (expected relative path not containing '..'): {pattern}")]
    InvalidOverridePattern {
        /// The pattern.
        pattern: String,
    },

    /// An `extends` target could not be found.
    #[error("failed to load config \"{config_name}\" to extend from (referenced from {importer_name})")]
    ExtendConfigMissing {
        /// The `extends` specifier as written.
        config_name: String,
        /// Breadcrumb of the config that declared it.
        importer_name: String,
    },

    /// A `plugin:` extends specifier named a file path instead of a plugin.
    #[error("'extends' cannot use a file path for plugins: {extend_name}")]
    ExtendsPluginPath {
        /// The `extends` specifier as written.
        extend_name: String,
    },

    /// A plugin module could not be found.
    #[error(
        "failed to load plugin '{plugin_name}' declared in '{importer_name}': cannot find module relative to {}",
        resolve_relative_to.display()
    )]
    PluginMissing {
        /// The normalized package name of the plugin.
        plugin_name: String,
        /// Directory the plugin was resolved from.
        resolve_relative_to: PathBuf,
        /// Breadcrumb of the config that declared it.
        importer_name: String,
    },

    /// A plugin name contains whitespace.
    #[error("whitespace found in plugin name '{plugin_name}'")]
    WhitespaceInPluginName {
        /// The normalized package name of the plugin.
        plugin_name: String,
    },

    /// A plugin was found but failed to load.
    #[error("failed to load plugin '{plugin}' declared in '{importer_name}': {source}")]
    PluginLoad {
        /// The plugin specifier as written.
        plugin: String,
        /// Breadcrumb of the config that declared it.
        importer_name: String,
        /// The captured cause.
        #[source]
        source: Arc<Error>,
    },

    /// A module specifier could not be resolved to a file.
    #[error("cannot find module '{request}' from {}", base_dir.display())]
    ModuleNotFound {
        /// The module request.
        request: String,
        /// Directory resolution started from.
        base_dir: PathBuf,
    },

    /// The module loader cannot evaluate this kind of module.
    #[error("cannot evaluate module {}: no loader for this module type", path.display())]
    UnsupportedModule {
        /// The module file.
        path: PathBuf,
    },

    /// A module was evaluated but its exports are unusable.
    #[error("invalid module {}: {message}", path.display())]
    InvalidModule {
        /// The module file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// An error raised while resolving an `extends` entry.
    #[error("{source}\nReferenced from: {importer}")]
    Extends {
        /// File path or breadcrumb of the config that declared the entry.
        importer: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// A captured reference error, surfaced because the reference was used.
    #[error(transparent)]
    Captured(Arc<Error>),

    /// An `extends` chain re-entered a config that is still being expanded.
    #[error("circular extends detected: {}", chain.join(" » "))]
    CircularExtends {
        /// The configs being expanded, outermost first, ending with the repeat.
        chain: Vec<String>,
    },

    /// An `extends` chain nested deeper than the configured limit.
    #[error("extends nesting exceeds the limit of {limit}")]
    ExtendsDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl Error {
    /// Map an I/O error on `path` to the matching variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use eslintrc::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::io(Path::new(".eslintrc"), io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::ConfigNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Check if error indicates a configuration file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Check if error indicates a module could not be resolved.
    #[must_use]
    pub fn is_module_not_found(&self) -> bool {
        matches!(self, Self::ModuleNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The innermost error, unwrapping `extends`, plugin-load and captured
    /// reference context.
    ///
    /// # Examples
    ///
    /// ```
    /// use eslintrc::Error;
    ///
    /// let inner = Error::ExtendsDepthExceeded { limit: 4 };
    /// let err = Error::Extends { importer: "a.json".into(), source: Box::new(inner) };
    /// assert!(matches!(err.root_cause(), Error::ExtendsDepthExceeded { limit: 4 }));
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Extends { source, .. } => source.root_cause(),
            Self::PluginLoad { source, .. } => source.root_cause(),
            Self::Captured(source) => source.root_cause(),
            other => other,
        }
    }

    /// Stable tag identifying the kind of failure, for message templating.
    #[must_use]
    pub fn message_template(&self) -> &'static str {
        match self.root_cause() {
            Self::ConfigParse { .. } => "failed-to-read-config",
            Self::ConfigNotFound { .. } => "config-not-found",
            Self::ConfigFieldNotFound { .. } => "config-field-not-found",
            Self::PermissionDenied { .. } => "permission-denied",
            Self::Io { .. } => "io-error",
            Self::Validation { .. } => "invalid-config",
            Self::InvalidGlob { .. } => "invalid-glob",
            Self::InvalidOverridePattern { .. } => "invalid-override-pattern",
            Self::ExtendConfigMissing { .. } => "extend-config-missing",
            Self::ExtendsPluginPath { .. } => "extend-plugin-path",
            Self::PluginMissing { .. } => "plugin-missing",
            Self::WhitespaceInPluginName { .. } => "whitespace-found",
            Self::ModuleNotFound { .. } => "module-not-found",
            Self::UnsupportedModule { .. } => "unsupported-module",
            Self::InvalidModule { .. } => "invalid-module",
            Self::CircularExtends { .. } => "circular-extends",
            Self::ExtendsDepthExceeded { .. } => "extends-depth-exceeded",
            // root_cause never returns a wrapper
            Self::Extends { .. } | Self::PluginLoad { .. } | Self::Captured(_) => "unknown",
        }
    }

    /// Structured data for the message template, as a JSON object.
    #[must_use]
    pub fn message_data(&self) -> Value {
        match self.root_cause() {
            Self::ConfigParse { path, message } => {
                json!({ "path": path.display().to_string(), "message": message })
            }
            Self::ConfigNotFound { path }
            | Self::ConfigFieldNotFound { path }
            | Self::PermissionDenied { path }
            | Self::UnsupportedModule { path } => json!({ "path": path.display().to_string() }),
            Self::Io { path, source } => {
                json!({ "path": path.display().to_string(), "message": source.to_string() })
            }
            Self::Validation {
                source_name,
                field,
                message,
            } => json!({ "source": source_name, "field": field, "message": message }),
            Self::InvalidGlob { pattern, message } => {
                json!({ "pattern": pattern, "message": message })
            }
            Self::InvalidOverridePattern { pattern } => json!({ "pattern": pattern }),
            Self::ExtendConfigMissing {
                config_name,
                importer_name,
            } => json!({ "configName": config_name, "importerName": importer_name }),
            Self::ExtendsPluginPath { extend_name } => json!({ "extendName": extend_name }),
            Self::PluginMissing {
                plugin_name,
                resolve_relative_to,
                importer_name,
            } => json!({
                "pluginName": plugin_name,
                "resolvePluginsRelativeTo": resolve_relative_to.display().to_string(),
                "importerName": importer_name,
            }),
            Self::WhitespaceInPluginName { plugin_name } => json!({ "pluginName": plugin_name }),
            Self::ModuleNotFound { request, base_dir } => {
                json!({ "request": request, "baseDir": base_dir.display().to_string() })
            }
            Self::InvalidModule { path, message } => {
                json!({ "path": path.display().to_string(), "message": message })
            }
            Self::CircularExtends { chain } => json!({ "chain": chain }),
            Self::ExtendsDepthExceeded { limit } => json!({ "limit": limit }),
            Self::Extends { .. } | Self::PluginLoad { .. } | Self::Captured(_) => json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error() {
        let err = Error::ConfigParse {
            path: PathBuf::from("/project/.eslintrc.json"),
            message: "unexpected token".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot read config file"));
        assert!(display.contains(".eslintrc.json"));
        assert!(display.contains("unexpected token"));
        assert_eq!(err.message_template(), "failed-to-read-config");
    }

    #[test]
    fn test_io_maps_not_found() {
        let err = Error::io(Path::new("a"), io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_io_maps_permission_denied() {
        let err = Error::io(
            Path::new("a"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(err.is_permission_denied());
        assert_eq!(err.message_template(), "permission-denied");
    }

    #[test]
    fn test_io_keeps_other_kinds() {
        let err = Error::io(Path::new("a"), io::Error::other("disk on fire"));
        assert!(matches!(err, Error::Io { .. }));
        assert!(format!("{err}").contains("disk on fire"));
    }

    #[test]
    fn test_extend_config_missing_data() {
        let err = Error::ExtendConfigMissing {
            config_name: "eslint:doesNotExist".to_string(),
            importer_name: ".eslintrc.json".to_string(),
        };
        assert_eq!(err.message_template(), "extend-config-missing");
        assert_eq!(err.message_data()["configName"], "eslint:doesNotExist");
        assert_eq!(err.message_data()["importerName"], ".eslintrc.json");
    }

    #[test]
    fn test_wrappers_delegate_to_root_cause() {
        let inner = Error::PluginMissing {
            plugin_name: "eslint-plugin-foo".to_string(),
            resolve_relative_to: PathBuf::from("/project"),
            importer_name: "base".to_string(),
        };
        let wrapped = Error::Extends {
            importer: "/project/.eslintrc.json".to_string(),
            source: Box::new(Error::PluginLoad {
                plugin: "foo".to_string(),
                importer_name: "base".to_string(),
                source: Arc::new(inner),
            }),
        };

        assert_eq!(wrapped.message_template(), "plugin-missing");
        assert_eq!(wrapped.message_data()["pluginName"], "eslint-plugin-foo");
        let display = format!("{wrapped}");
        assert!(display.contains("Referenced from: /project/.eslintrc.json"));
        assert!(display.contains("failed to load plugin 'foo'"));
    }

    #[test]
    fn test_wrapped_not_found_is_not_a_miss() {
        let err = Error::Extends {
            importer: "x".to_string(),
            source: Box::new(Error::ConfigNotFound {
                path: PathBuf::from("missing.json"),
            }),
        };
        assert!(!err.is_not_found());
        assert!(err.root_cause().is_not_found());
    }

    #[test]
    fn test_circular_extends_display() {
        let err = Error::CircularExtends {
            chain: vec!["a.json".into(), "b.json".into(), "a.json".into()],
        };
        assert_eq!(
            format!("{err}"),
            "circular extends detected: a.json » b.json » a.json"
        );
        assert_eq!(err.message_data()["chain"][2], "a.json");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::ExtendsDepthExceeded { limit: 1 })
        }

        assert!(returns_result().is_err());
    }
}
