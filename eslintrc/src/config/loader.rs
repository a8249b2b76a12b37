//! Config file loading.
//!
//! The format is picked from the file name: JavaScript configs go through
//! the [`ModuleLoader`], `package.json` is read for its `eslintConfig`
//! field, and the rest are parsed as JSON-with-comments or YAML.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::{RawConfig, PACKAGE_JSON, PACKAGE_JSON_FIELD};
use crate::error::{Error, Result};
use crate::modules::{ModuleLoader, StaticModuleLoader};

/// The on-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Module,
    PackageJson,
    Json,
    Yaml,
    Legacy,
}

impl Format {
    fn detect(path: &Path) -> Self {
        if path.file_name().is_some_and(|name| name == PACKAGE_JSON) {
            return Self::PackageJson;
        }
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("js" | "cjs") => Self::Module,
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Legacy,
        }
    }
}

/// Loads raw configs from files.
///
/// # Examples
///
/// ```no_run
/// use eslintrc::config::ConfigFileLoader;
/// use std::path::Path;
///
/// let loader = ConfigFileLoader::default();
/// match loader.load(Path::new("package.json")).unwrap() {
///     Some(raw) => println!("{} keys", raw.len()),
///     None => println!("no eslintConfig field"),
/// }
/// ```
#[derive(Clone)]
pub struct ConfigFileLoader {
    module_loader: Arc<dyn ModuleLoader>,
}

impl Default for ConfigFileLoader {
    fn default() -> Self {
        Self::new(Arc::new(StaticModuleLoader::new()))
    }
}

impl std::fmt::Debug for ConfigFileLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFileLoader").finish_non_exhaustive()
    }
}

impl ConfigFileLoader {
    /// Create a loader that evaluates JavaScript configs with `module_loader`.
    #[must_use]
    pub fn new(module_loader: Arc<dyn ModuleLoader>) -> Self {
        Self { module_loader }
    }

    /// Load the raw config stored in `path`.
    ///
    /// Returns `Ok(None)` for a `package.json` without an `eslintConfig`
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::PermissionDenied`] if it cannot be read, and
    /// [`Error::ConfigParse`] if its content is malformed or not an object.
    pub fn load(&self, path: &Path) -> Result<Option<RawConfig>> {
        let format = Format::detect(path);
        log::debug!("Loading config file {} as {format:?}", path.display());

        let value = match format {
            Format::Module => Some(self.module_loader.load(path)?),
            Format::PackageJson => {
                let mut manifest: Value =
                    serde_json::from_str(&read(path)?).map_err(|e| parse_error(path, e))?;
                manifest
                    .as_object_mut()
                    .and_then(|object| object.remove(PACKAGE_JSON_FIELD))
                    .filter(|field| !field.is_null())
            }
            Format::Json => Some(parse_json(path, &read(path)?)?),
            Format::Yaml => Some(parse_yaml(path, &read(path)?)?),
            Format::Legacy => {
                let contents = read(path)?;
                match json5::from_str::<Value>(&contents) {
                    Ok(value) => Some(value),
                    Err(_) => Some(parse_yaml(path, &contents)?),
                }
            }
        };

        value.map(|value| into_object(path, value)).transpose()
    }
}

fn read(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    if contents.starts_with('\u{feff}') {
        Ok(contents['\u{feff}'.len_utf8()..].to_string())
    } else {
        Ok(contents)
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn parse_json(path: &Path, contents: &str) -> Result<Value> {
    json5::from_str(contents).map_err(|e| parse_error(path, e))
}

fn parse_yaml(path: &Path, contents: &str) -> Result<Value> {
    let blank = contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    });
    if blank {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(contents).map_err(|e| parse_error(path, e))
}

fn into_object(path: &Path, value: Value) -> Result<RawConfig> {
    match value {
        Value::Object(object) => Ok(object),
        Value::Null => Ok(RawConfig::new()),
        other => Err(Error::ConfigParse {
            path: path.to_path_buf(),
            message: format!("expected a configuration object, found {}", kind_of(&other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
