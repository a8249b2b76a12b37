//! The entry point for resolving configuration.
//!
//! [`ConfigFactory`] owns everything a resolution needs: the working
//! directory, the home directory, the parser and plugin pools, and the
//! module resolver and loader. It is cheap to share and safe to use from
//! several threads.
//!
//! # Examples
//!
//! ```no_run
//! use eslintrc::{CascadeOptions, ConfigFactory};
//! use std::path::Path;
//!
//! let factory = ConfigFactory::builder().with_cwd("/repo").build();
//! let sequence = factory
//!     .resolve_directory(Path::new("/repo/src"), &CascadeOptions::default())
//!     .unwrap();
//!
//! for fragment in sequence.matching(Path::new("/repo/src/index.js")) {
//!     println!("{}", fragment.name());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::config::{ConfigFileLoader, ConfigValidator, RawConfig, CONFIG_FILENAMES};
use crate::error::{Error, Result};
use crate::fragment::ConfigFragment;
use crate::modules::{ModuleLoader, ModuleResolver, NodeModuleResolver, StaticModuleLoader};
use crate::normalizer::{ConfigNormalizer, NormalizeContext, DEFAULT_MAX_DEPTH};
use crate::path::{absolutize, display_name};
use crate::reference::{PluginDefinition, ReferenceLoader};
use crate::sequence::ConfigSequence;

/// Name given to in-memory configs created without a name or file.
const INLINE_CONFIG_NAME: &str = "<input>";

/// Options for [`ConfigFactory::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// File the config is anchored to: relative `extends` and override
    /// patterns resolve from its directory.
    pub file_path: Option<PathBuf>,
    /// Breadcrumb name of the config.
    pub name: Option<String>,
    /// Sequence to assemble the result onto.
    pub parent: Option<ConfigSequence>,
}

/// Resolves configuration into fragment sequences.
#[derive(Debug, Clone)]
pub struct ConfigFactory {
    pub(crate) cwd: PathBuf,
    pub(crate) home_dir: Option<PathBuf>,
    pub(crate) normalizer: ConfigNormalizer,
}

impl ConfigFactory {
    /// Start configuring a factory.
    #[must_use]
    pub fn builder() -> ConfigFactoryBuilder {
        ConfigFactoryBuilder::default()
    }

    /// The working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The directory holding the personal config, if known.
    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// The normalizer, for flattening configs directly.
    pub fn normalizer(&self) -> &ConfigNormalizer {
        &self.normalizer
    }

    /// Resolve an in-memory config.
    ///
    /// `None` yields the parent sequence unchanged, or an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation (top-level `files`
    /// included) or cannot be normalized.
    pub fn create(&self, raw: Option<RawConfig>, options: CreateOptions) -> Result<ConfigSequence> {
        let Some(raw) = raw else {
            return Ok(ConfigSequence::assemble(None, options.parent.as_ref()));
        };

        let file_path = options.file_path.map(|path| absolutize(&path, &self.cwd));
        let name = options.name.unwrap_or_else(|| match &file_path {
            Some(path) => display_name(path, &self.cwd),
            None => INLINE_CONFIG_NAME.to_string(),
        });
        ConfigValidator::validate(&raw, &name)?;

        let base = file_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
            .to_path_buf();
        let context = NormalizeContext::new(name, file_path, base);
        let fragments = self.normalizer.normalize(raw, &context)?;

        Ok(ConfigSequence::assemble(Some(fragments), options.parent.as_ref()))
    }

    /// Resolve a single config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::ConfigFieldNotFound`] for a `package.json` without an
    /// `eslintConfig` field, or any parse, validation or `extends` error.
    pub fn load_file(&self, path: &Path, name: Option<&str>) -> Result<ConfigSequence> {
        let path = absolutize(path, &self.cwd);
        let name = name.map_or_else(|| display_name(&path, &self.cwd), str::to_string);
        let raw = self.normalizer.load_config_file(&path, &name)?;
        self.normalize_file(raw, &path, name).map(ConfigSequence::new)
    }

    /// Resolve the config of one directory, without ancestors.
    ///
    /// The standard file names are tried in order and the first config
    /// found is used. A directory without one yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if a candidate cannot be
    /// accessed, or any error loading the config found.
    pub fn load_in_directory(&self, dir: &Path, name: Option<&str>) -> Result<ConfigSequence> {
        let dir = absolutize(dir, &self.cwd);
        let fragments = self.find_in_directory(&dir, name)?;
        Ok(ConfigSequence::new(fragments.unwrap_or_default()))
    }

    /// Search `dir` for the first config file that yields a config.
    pub(crate) fn find_in_directory(
        &self,
        dir: &Path,
        name: Option<&str>,
    ) -> Result<Option<Vec<ConfigFragment>>> {
        match fs::metadata(dir) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Ok(None),
            Err(err) => match Error::io(dir, err) {
                err if err.is_not_found() => return Ok(None),
                err => return Err(err),
            },
        }

        for filename in CONFIG_FILENAMES {
            let path = dir.join(filename);
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {}
                Ok(_) => continue,
                Err(err) => match Error::io(&path, err) {
                    err if err.is_not_found() => continue,
                    err => return Err(err),
                },
            }

            let name = name.map_or_else(|| display_name(&path, &self.cwd), str::to_string);
            let raw = match self.normalizer.files().load(&path) {
                Ok(Some(raw)) => raw,
                Ok(None) => {
                    log::debug!("No config in {}, continuing", path.display());
                    continue;
                }
                Err(err) if err.is_not_found() || err.is_module_not_found() => continue,
                Err(err) => return Err(err),
            };
            ConfigValidator::validate(&raw, &name)?;

            log::debug!("Loaded config file {}", path.display());
            return self.normalize_file(raw, &path, name).map(Some);
        }

        Ok(None)
    }

    fn normalize_file(&self, raw: RawConfig, path: &Path, name: String) -> Result<Vec<ConfigFragment>> {
        let base = path.parent().unwrap_or(&self.cwd).to_path_buf();
        let context = NormalizeContext::new(name, Some(path.to_path_buf()), base);
        self.normalizer.normalize(raw, &context)
    }
}

/// Builder for [`ConfigFactory`].
///
/// # Examples
///
/// ```
/// use eslintrc::{ConfigFactory, PluginDefinition};
///
/// let factory = ConfigFactory::builder()
///     .with_cwd("/repo")
///     .with_home_dir(None)
///     .with_plugin("react", PluginDefinition::default())
///     .with_max_depth(16)
///     .build();
/// assert_eq!(factory.cwd(), std::path::Path::new("/repo"));
/// ```
#[derive(Default)]
pub struct ConfigFactoryBuilder {
    cwd: Option<PathBuf>,
    home_dir: Option<Option<PathBuf>>,
    resolve_plugins_relative_to: Option<PathBuf>,
    parsers: Vec<(String, Value)>,
    plugins: Vec<(String, PluginDefinition)>,
    resolver: Option<Arc<dyn ModuleResolver>>,
    module_loader: Option<Arc<dyn ModuleLoader>>,
    max_depth: Option<usize>,
}

impl ConfigFactoryBuilder {
    /// Set the working directory. Defaults to the process's.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the directory searched for the personal config; `None` disables
    /// it. Defaults to the user's home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = Some(home_dir);
        self
    }

    /// Resolve plugins from `dir` rather than from the declaring config.
    #[must_use]
    pub fn with_resolve_plugins_relative_to(mut self, dir: Option<PathBuf>) -> Self {
        self.resolve_plugins_relative_to = dir;
        self
    }

    /// Add a parser to the pool.
    #[must_use]
    pub fn with_parser(mut self, id: impl Into<String>, definition: Value) -> Self {
        self.parsers.push((id.into(), definition));
        self
    }

    /// Add a plugin to the pool, by long name or short id.
    #[must_use]
    pub fn with_plugin(mut self, id: impl Into<String>, definition: PluginDefinition) -> Self {
        self.plugins.push((id.into(), definition));
        self
    }

    /// Replace the module resolver.
    #[must_use]
    pub fn with_module_resolver(mut self, resolver: Arc<dyn ModuleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the module loader.
    #[must_use]
    pub fn with_module_loader(mut self, module_loader: Arc<dyn ModuleLoader>) -> Self {
        self.module_loader = Some(module_loader);
        self
    }

    /// Limit how deeply `extends` may nest.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Build the factory.
    #[must_use]
    pub fn build(self) -> ConfigFactory {
        let cwd = self
            .cwd
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let home_dir = self.home_dir.unwrap_or_else(home::home_dir);
        let resolve_plugins_relative_to = self
            .resolve_plugins_relative_to
            .map(|dir| absolutize(&dir, &cwd));

        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(NodeModuleResolver::new()));
        let module_loader = self
            .module_loader
            .unwrap_or_else(|| Arc::new(StaticModuleLoader::new()));

        let mut references =
            ReferenceLoader::new(cwd.clone(), resolver, Arc::clone(&module_loader))
                .with_resolve_plugins_relative_to(resolve_plugins_relative_to);
        for (id, definition) in self.parsers {
            references = references.with_parser(id, Arc::new(definition));
        }
        for (id, definition) in self.plugins {
            references = references.with_plugin(id, Arc::new(definition));
        }

        let normalizer = ConfigNormalizer::new(references, ConfigFileLoader::new(module_loader))
            .with_max_depth(self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH));

        log::debug!("Config factory ready (cwd: {})", cwd.display());
        ConfigFactory {
            cwd,
            home_dir,
            normalizer,
        }
    }
}
