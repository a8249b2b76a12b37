//! Parser and plugin references.
//!
//! Loading a parser or plugin never fails outright: the outcome is a
//! [`Reference`] that either holds the loaded definition or the captured
//! error. Consumers surface the error only when they actually use that
//! parser or plugin.

mod loader;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use loader::ReferenceLoader;

/// The config that declared a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Importer {
    /// Breadcrumb name of the declaring config.
    pub name: String,
    /// File of the declaring config, absent for in-memory configs.
    pub path: Option<PathBuf>,
}

impl Importer {
    /// Create an importer record.
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Directory relative requests are resolved from, if the importer has a file.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

/// The outcome of loading a parser or plugin.
///
/// Exactly one of the definition and the error exists.
#[derive(Debug)]
pub enum Reference<D> {
    /// The module was found and evaluated.
    Loaded {
        /// Id the reference was requested under.
        id: String,
        /// Resolved module file. Pool hits carry the importer's file for
        /// parsers and nothing for plugins.
        file_path: Option<PathBuf>,
        /// The loaded definition.
        definition: Arc<D>,
        /// Who asked for it.
        importer: Importer,
    },
    /// Resolution or evaluation failed.
    Failed {
        /// Id the reference was requested under.
        id: String,
        /// The captured failure.
        error: Arc<Error>,
        /// Who asked for it.
        importer: Importer,
    },
}

impl<D> Clone for Reference<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Loaded {
                id,
                file_path,
                definition,
                importer,
            } => Self::Loaded {
                id: id.clone(),
                file_path: file_path.clone(),
                definition: Arc::clone(definition),
                importer: importer.clone(),
            },
            Self::Failed {
                id,
                error,
                importer,
            } => Self::Failed {
                id: id.clone(),
                error: Arc::clone(error),
                importer: importer.clone(),
            },
        }
    }
}

impl<D> Reference<D> {
    /// Id the reference was requested under.
    pub fn id(&self) -> &str {
        match self {
            Self::Loaded { id, .. } | Self::Failed { id, .. } => id,
        }
    }

    /// The config that declared the reference.
    pub fn importer(&self) -> &Importer {
        match self {
            Self::Loaded { importer, .. } | Self::Failed { importer, .. } => importer,
        }
    }

    /// The loaded definition, if loading succeeded.
    pub fn definition(&self) -> Option<&D> {
        match self {
            Self::Loaded { definition, .. } => Some(&**definition),
            Self::Failed { .. } => None,
        }
    }

    /// The captured error, if loading failed.
    pub fn error(&self) -> Option<&Arc<Error>> {
        match self {
            Self::Loaded { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// Resolved module file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::Loaded { file_path, .. } => file_path.as_deref(),
            Self::Failed { .. } => None,
        }
    }

    /// Whether loading succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// The definition, or the captured error once the caller needs it.
    ///
    /// # Errors
    ///
    /// Returns the captured error of a failed reference.
    pub fn require(&self) -> std::result::Result<&D, Arc<Error>> {
        match self {
            Self::Loaded { definition, .. } => Ok(&**definition),
            Self::Failed { error, .. } => Err(Arc::clone(error)),
        }
    }
}

impl<D> Serialize for Reference<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reference", 4)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("filePath", &self.file_path())?;
        state.serialize_field("importerName", &self.importer().name)?;
        state.serialize_field("error", &self.error().map(|e| e.to_string()))?;
        state.end()
    }
}

impl<D> fmt::Display for Reference<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { id, file_path, .. } => match file_path {
                Some(path) => write!(f, "{id} ({})", path.display()),
                None => write!(f, "{id}"),
            },
            Self::Failed { id, error, .. } => write!(f, "{id} (failed: {error})"),
        }
    }
}

/// A parser reference. Parser exports are kept as an opaque value.
pub type ParserReference = Reference<Value>;

/// A plugin reference.
pub type PluginReference = Reference<PluginDefinition>;

/// Plugin references by short id, in declaration order.
pub type PluginReferences = IndexMap<String, PluginReference>;

/// Normalized plugin exports.
///
/// # Examples
///
/// ```
/// use eslintrc::PluginDefinition;
/// use serde_json::json;
/// use std::path::Path;
///
/// let plugin = PluginDefinition::from_exports(
///     json!({ "processors": { ".md": {} }, "meta": { "name": "markdown" } }),
///     Path::new("eslint-plugin-markdown.json"),
/// )
/// .unwrap();
/// assert!(plugin.processors.contains_key(".md"));
/// assert!(plugin.rules.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginDefinition {
    /// Shareable configs, by name.
    pub configs: Map<String, Value>,
    /// Environments, by name.
    pub environments: Map<String, Value>,
    /// Processors, by id. Ids starting with `.` apply to that file extension.
    pub processors: Map<String, Value>,
    /// Rules, by name.
    pub rules: Map<String, Value>,
}

impl PluginDefinition {
    /// Normalize the exports of the plugin module at `path`.
    ///
    /// Unknown keys are dropped; missing sections are empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModule`] if the exports or one of the
    /// sections is not an object.
    pub fn from_exports(exports: Value, path: &Path) -> Result<Self> {
        let Value::Object(mut exports) = exports else {
            return Err(Error::InvalidModule {
                path: path.to_path_buf(),
                message: "plugin must export an object".to_string(),
            });
        };

        let mut section = |key: &str| match exports.remove(key) {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(Error::InvalidModule {
                path: path.to_path_buf(),
                message: format!("plugin '{key}' must be an object"),
            }),
        };

        Ok(Self {
            configs: section("configs")?,
            environments: section("environments")?,
            processors: section("processors")?,
            rules: section("rules")?,
        })
    }

    /// Processor ids that apply to a file extension.
    pub fn file_extension_processors(&self) -> impl Iterator<Item = &str> {
        self.processors
            .keys()
            .map(String::as_str)
            .filter(|id| id.starts_with('.'))
    }
}
