//! Resolving parser and plugin specifiers into references.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use super::{
    Importer, ParserReference, PluginDefinition, PluginReference, PluginReferences, Reference,
};
use crate::error::{Error, Result};
use crate::modules::{ModuleLoader, ModuleResolver};
use crate::naming::{normalize_package_name, shorthand_name, PLUGIN_PREFIX};

/// Loads parsers and plugins, consulting the in-memory pools first.
///
/// None of the `load_*` methods return an error: failures are captured in
/// the returned [`Reference`].
#[derive(Clone)]
pub struct ReferenceLoader {
    cwd: PathBuf,
    resolve_plugins_relative_to: Option<PathBuf>,
    parsers: HashMap<String, Arc<Value>>,
    plugins: HashMap<String, Arc<PluginDefinition>>,
    resolver: Arc<dyn ModuleResolver>,
    module_loader: Arc<dyn ModuleLoader>,
}

impl fmt::Debug for ReferenceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceLoader")
            .field("cwd", &self.cwd)
            .field("resolve_plugins_relative_to", &self.resolve_plugins_relative_to)
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ReferenceLoader {
    /// Create a loader resolving from `cwd` when an importer has no file.
    pub fn new(
        cwd: PathBuf,
        resolver: Arc<dyn ModuleResolver>,
        module_loader: Arc<dyn ModuleLoader>,
    ) -> Self {
        Self {
            cwd,
            resolve_plugins_relative_to: None,
            parsers: HashMap::new(),
            plugins: HashMap::new(),
            resolver,
            module_loader,
        }
    }

    /// Resolve plugins from `dir` instead of the importer's directory.
    #[must_use]
    pub fn with_resolve_plugins_relative_to(mut self, dir: Option<PathBuf>) -> Self {
        self.resolve_plugins_relative_to = dir;
        self
    }

    /// Pre-satisfy requests for the parser `id`.
    #[must_use]
    pub fn with_parser(mut self, id: impl Into<String>, definition: Arc<Value>) -> Self {
        self.parsers.insert(id.into(), definition);
        self
    }

    /// Pre-satisfy requests for the plugin `id`, by long name or short id.
    #[must_use]
    pub fn with_plugin(mut self, id: impl Into<String>, definition: Arc<PluginDefinition>) -> Self {
        self.plugins.insert(id.into(), definition);
        self
    }

    /// The module resolver in use.
    pub fn resolver(&self) -> &dyn ModuleResolver {
        self.resolver.as_ref()
    }

    /// The module loader in use.
    pub fn module_loader(&self) -> &dyn ModuleLoader {
        self.module_loader.as_ref()
    }

    /// The working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn base_dir<'a>(&'a self, importer: &'a Importer) -> &'a Path {
        importer.base_dir().unwrap_or(&self.cwd)
    }

    /// Load the parser `spec` declared by `importer`.
    pub fn load_parser(&self, spec: &str, importer: &Importer) -> ParserReference {
        if let Some(definition) = self.parsers.get(spec) {
            log::debug!("Parser '{spec}' found in pool");
            return Reference::Loaded {
                id: spec.to_string(),
                file_path: importer.path.clone(),
                definition: Arc::clone(definition),
                importer: importer.clone(),
            };
        }

        let base_dir = self.base_dir(importer);
        match self.load_module(spec, base_dir) {
            Ok((file_path, exports)) => {
                log::debug!("Loaded parser '{spec}' from {}", file_path.display());
                Reference::Loaded {
                    id: spec.to_string(),
                    file_path: Some(file_path),
                    definition: Arc::new(exports),
                    importer: importer.clone(),
                }
            }
            Err(error) => {
                log::debug!("Failed to load parser '{spec}' for '{}': {error}", importer.name);
                Reference::Failed {
                    id: spec.to_string(),
                    error: Arc::new(error),
                    importer: importer.clone(),
                }
            }
        }
    }

    /// Load the plugin `spec` declared by `importer`.
    ///
    /// The reference is keyed by the plugin's short id: `react` and
    /// `eslint-plugin-react` both load plugin `react`.
    pub fn load_plugin(&self, spec: &str, importer: &Importer) -> PluginReference {
        let request = normalize_package_name(spec, PLUGIN_PREFIX);
        let id = shorthand_name(&request, PLUGIN_PREFIX);

        let outcome = if spec.chars().any(char::is_whitespace) {
            Err(Error::WhitespaceInPluginName {
                plugin_name: request,
            })
        } else if let Some(definition) =
            self.plugins.get(&request).or_else(|| self.plugins.get(&id))
        {
            log::debug!("Plugin '{id}' found in pool");
            Ok((None, Arc::clone(definition)))
        } else {
            self.load_plugin_module(spec, &request, importer)
                .map(|(path, definition)| (Some(path), Arc::new(definition)))
        };

        match outcome {
            Ok((file_path, definition)) => Reference::Loaded {
                id,
                file_path,
                definition,
                importer: importer.clone(),
            },
            Err(error) => {
                log::debug!("Failed to load plugin '{spec}' for '{}': {error}", importer.name);
                Reference::Failed {
                    id,
                    error: Arc::new(error),
                    importer: importer.clone(),
                }
            }
        }
    }

    fn load_plugin_module(
        &self,
        spec: &str,
        request: &str,
        importer: &Importer,
    ) -> Result<(PathBuf, PluginDefinition)> {
        let relative_to = self
            .resolve_plugins_relative_to
            .as_deref()
            .unwrap_or_else(|| self.base_dir(importer));

        let loaded = self.load_module(request, relative_to).and_then(|(path, exports)| {
            PluginDefinition::from_exports(exports, &path).map(|definition| (path, definition))
        });

        match loaded {
            Ok((path, definition)) => {
                log::debug!("Loaded plugin '{spec}' from {}", path.display());
                Ok((path, definition))
            }
            Err(error) if error.is_module_not_found() => Err(Error::PluginMissing {
                plugin_name: request.to_string(),
                resolve_relative_to: relative_to.to_path_buf(),
                importer_name: importer.name.clone(),
            }),
            Err(error) => Err(Error::PluginLoad {
                plugin: spec.to_string(),
                importer_name: importer.name.clone(),
                source: Arc::new(error),
            }),
        }
    }

    /// Load every plugin in `specs`; a later duplicate id replaces the earlier one.
    pub fn load_plugins<S: AsRef<str>>(&self, specs: &[S], importer: &Importer) -> PluginReferences {
        let mut references = PluginReferences::with_capacity(specs.len());
        for spec in specs {
            let reference = self.load_plugin(spec.as_ref(), importer);
            references.insert(reference.id().to_string(), reference);
        }
        references
    }

    fn load_module(&self, request: &str, base_dir: &Path) -> Result<(PathBuf, Value)> {
        let path = self.resolver.resolve(request, base_dir)?;
        let exports = self.module_loader.load(&path)?;
        Ok((path, exports))
    }
}
