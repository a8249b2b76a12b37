//! Flattening raw configs into fragments.
//!
//! A raw config is expanded depth-first into an ordered list of
//! [`ConfigFragment`]s:
//!
//! 1. the fragments of each `extends` entry, in declared order;
//! 2. one fragment per file-extension processor of the declared plugins;
//! 3. one fragment for the config's own settings;
//! 4. the fragments of each `overrides` entry, in declared order.
//!
//! `files` and `excludedFiles` become a [`MatchPredicate`] composed into
//! every fragment produced under them.
//!
//! # Examples
//!
//! ```
//! use eslintrc::normalizer::NormalizeContext;
//! use eslintrc::ConfigFactory;
//! use serde_json::json;
//!
//! let factory = ConfigFactory::builder().with_cwd("/project").build();
//! let raw = json!({
//!     "rules": { "semi": "error" },
//!     "overrides": [{ "files": "*.ts", "rules": { "semi": "off" } }]
//! });
//!
//! let context = NormalizeContext::new("inline", None, "/project");
//! let fragments = factory
//!     .normalizer()
//!     .normalize(raw.as_object().unwrap().clone(), &context)
//!     .unwrap();
//!
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[1].name(), "inline#overrides[0]");
//! assert!(fragments[1].matches("/project/src/a.ts"));
//! ```

mod extends;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{ConfigFileLoader, ConfigValidator, RawConfig};
use crate::error::{Error, Result};
use crate::fragment::{ConfigFragment, FragmentKind};
use crate::matcher::MatchPredicate;
use crate::reference::{Importer, PluginReferences, ReferenceLoader};

/// Default limit on nested `extends`.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Where a config being normalized sits in the resolution.
#[derive(Debug, Clone)]
pub struct NormalizeContext {
    name: String,
    file_path: Option<PathBuf>,
    match_base_path: PathBuf,
    kind: FragmentKind,
    depth: usize,
    chain: Vec<String>,
}

impl NormalizeContext {
    /// Context for a top-level config.
    ///
    /// `match_base_path` is the directory override patterns are relative
    /// to: the config file's directory, or the working directory for
    /// in-memory configs.
    pub fn new(
        name: impl Into<String>,
        file_path: Option<PathBuf>,
        match_base_path: impl Into<PathBuf>,
    ) -> Self {
        let chain = file_path
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        Self {
            name: name.into(),
            file_path,
            match_base_path: match_base_path.into(),
            kind: FragmentKind::Config,
            depth: 0,
            chain,
        }
    }

    /// The breadcrumb name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The config file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// The directory override patterns are relative to.
    pub fn match_base_path(&self) -> &Path {
        &self.match_base_path
    }

    /// How many `extends` hops led here.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for an override or processor nested in the same file.
    fn nested(&self, name: String, kind: FragmentKind) -> Self {
        Self {
            name,
            kind,
            ..self.clone()
        }
    }

    /// Context for a config pulled in through `extends`.
    ///
    /// `key` identifies the config for cycle detection.
    fn extended(
        &self,
        name: String,
        file_path: Option<PathBuf>,
        key: String,
        max_depth: usize,
    ) -> Result<Self> {
        if self.chain.contains(&key) {
            let mut chain = self.chain.clone();
            chain.push(key);
            return Err(Error::CircularExtends { chain });
        }
        if self.depth >= max_depth {
            return Err(Error::ExtendsDepthExceeded { limit: max_depth });
        }

        let mut chain = self.chain.clone();
        chain.push(key);
        Ok(Self {
            name,
            file_path,
            match_base_path: self.match_base_path.clone(),
            kind: FragmentKind::Config,
            depth: self.depth + 1,
            chain,
        })
    }

    /// Name shown in "Referenced from" lines.
    fn importer_label(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => self.name.clone(),
        }
    }

    fn importer(&self) -> Importer {
        Importer::new(self.name.clone(), self.file_path.clone())
    }

    fn base_dir(&self) -> Option<&Path> {
        self.file_path.as_deref().and_then(Path::parent)
    }
}

/// Expands raw configs into fragments.
#[derive(Debug, Clone)]
pub struct ConfigNormalizer {
    references: ReferenceLoader,
    files: ConfigFileLoader,
    max_depth: usize,
}

impl ConfigNormalizer {
    /// Create a normalizer.
    pub fn new(references: ReferenceLoader, files: ConfigFileLoader) -> Self {
        Self {
            references,
            files,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deeply `extends` may nest.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The reference loader used for parsers and plugins.
    pub fn references(&self) -> &ReferenceLoader {
        &self.references
    }

    /// Flatten `raw` into fragments.
    ///
    /// `raw` is not validated here; configs loaded from files are
    /// validated when they are loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if a glob is invalid, an `extends` entry cannot be
    /// resolved, or a key has the wrong shape.
    pub fn normalize(&self, raw: RawConfig, context: &NormalizeContext) -> Result<Vec<ConfigFragment>> {
        let mut fragments = Vec::new();
        self.normalize_into(raw, context, &mut fragments)?;
        Ok(fragments)
    }

    /// Flatten `raw`, appending its fragments to `out`.
    ///
    /// # Errors
    ///
    /// See [`ConfigNormalizer::normalize`].
    pub fn normalize_into(
        &self,
        mut raw: RawConfig,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let files = take_string_list(&mut raw, "files", context)?;
        let excluded_files = take_string_list(&mut raw, "excludedFiles", context)?;
        let predicate =
            MatchPredicate::build(files, excluded_files, Some(context.match_base_path()))?;

        let start = out.len();
        self.normalize_body(raw, context, out)?;

        if let Some(predicate) = predicate {
            for fragment in &mut out[start..] {
                fragment.restrict(&predicate);
            }
        }
        Ok(())
    }

    fn normalize_body(
        &self,
        mut raw: RawConfig,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let extends = take_string_list(&mut raw, "extends", context)?.unwrap_or_default();
        let overrides = take_overrides(&mut raw, context)?;
        let parser = take_string(&mut raw, "parser", context)?;
        let plugins = take_string_list(&mut raw, "plugins", context)?;

        for spec in &extends {
            self.load_extends(spec, context, out)?;
        }

        let importer = context.importer();
        let parser = parser.map(|spec| self.references.load_parser(&spec, &importer));
        let plugins = plugins.map(|specs| self.references.load_plugins(&specs, &importer));

        if let Some(plugins) = &plugins {
            self.normalize_processors(plugins, context, out)?;
        }

        log::debug!("Normalized config fragment '{}'", context.name);
        out.push(ConfigFragment::new(
            context.kind,
            context.name.clone(),
            context.file_path.clone(),
            raw,
            parser,
            plugins,
        ));

        for (i, entry) in overrides.into_iter().enumerate() {
            let nested = context.nested(format!("{}#overrides[{i}]", context.name), context.kind);
            self.normalize_into(entry, &nested, out)?;
        }

        Ok(())
    }

    /// Emit an implicit override for each file-extension processor.
    fn normalize_processors(
        &self,
        plugins: &PluginReferences,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        for (plugin_id, reference) in plugins {
            let Some(definition) = reference.definition() else {
                continue;
            };
            for processor_id in definition.file_extension_processors() {
                let qualified = format!("{plugin_id}/{processor_id}");
                let mut raw = Map::new();
                raw.insert("files".into(), Value::from(vec![format!("*{processor_id}")]));
                raw.insert("processor".into(), Value::from(qualified.clone()));

                let nested = context.nested(
                    format!("{}#processors[\"{qualified}\"]", context.name),
                    FragmentKind::ImplicitProcessor,
                );
                self.normalize_into(raw, &nested, out)?;
            }
        }
        Ok(())
    }

    /// Load and validate a config file for `extends`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFieldNotFound`] for a `package.json` without
    /// an `eslintConfig` field, or any load or validation error.
    pub fn load_config_file(&self, path: &Path, source_name: &str) -> Result<RawConfig> {
        let raw = self
            .files
            .load(path)?
            .ok_or_else(|| Error::ConfigFieldNotFound {
                path: path.to_path_buf(),
            })?;
        ConfigValidator::validate(&raw, source_name)?;
        Ok(raw)
    }

    /// The file loader.
    pub fn files(&self) -> &ConfigFileLoader {
        &self.files
    }
}

fn shape_error(context: &NormalizeContext, field: &str, message: &str) -> Error {
    Error::Validation {
        source_name: context.name.clone(),
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Remove a key holding a string or a list of strings.
fn take_string_list(
    raw: &mut RawConfig,
    key: &str,
    context: &NormalizeContext,
) -> Result<Option<Vec<String>>> {
    match raw.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(item)) => Ok(Some(vec![item])),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(item) => Ok(item),
                _ => Err(shape_error(context, key, "must contain only strings")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(shape_error(context, key, "must be a string or an array of strings")),
    }
}

fn take_string(raw: &mut RawConfig, key: &str, context: &NormalizeContext) -> Result<Option<String>> {
    match raw.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(shape_error(context, key, "must be a string")),
    }
}

fn take_overrides(raw: &mut RawConfig, context: &NormalizeContext) -> Result<Vec<RawConfig>> {
    match raw.remove("overrides") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                Value::Object(entry) => Ok(entry),
                _ => Err(shape_error(context, &format!("overrides[{i}]"), "must be an object")),
            })
            .collect(),
        Some(_) => Err(shape_error(context, "overrides", "must be an array of objects")),
    }
}
