//! Raw configuration objects and the files they come from.
//!
//! A raw config is an untyped JSON object as written by the user, with key
//! order preserved. This module loads raw configs from the supported file
//! formats, validates them against the configuration schema, and provides
//! the built-in `eslint:*` baselines.
//!
//! # Supported files
//!
//! Directories are searched for these names, in order:
//!
//! 1. `.eslintrc.js`
//! 2. `.eslintrc.yaml`
//! 3. `.eslintrc.yml`
//! 4. `.eslintrc.json`
//! 5. `.eslintrc` (legacy, JSON or YAML)
//! 6. `package.json` (the `eslintConfig` field)
//!
//! # Examples
//!
//! ```no_run
//! use eslintrc::config::{ConfigFileLoader, ConfigValidator};
//! use std::path::Path;
//!
//! let loader = ConfigFileLoader::default();
//! if let Some(raw) = loader.load(Path::new(".eslintrc.json")).unwrap() {
//!     ConfigValidator::validate(&raw, ".eslintrc.json").unwrap();
//! }
//! ```

mod builtin;
mod loader;
mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use serde_json::{Map, Value};

pub use builtin::builtin_config;
pub use loader::ConfigFileLoader;
pub use validator::ConfigValidator;

/// An untyped configuration object, as written in a config file.
pub type RawConfig = Map<String, Value>;

/// Config file names searched in each directory, in priority order.
pub const CONFIG_FILENAMES: &[&str] = &[
    ".eslintrc.js",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc.json",
    ".eslintrc",
    "package.json",
];

/// Name of the package manifest, whose `eslintConfig` field holds a config.
pub const PACKAGE_JSON: &str = "package.json";

/// Field of the package manifest holding the config.
pub const PACKAGE_JSON_FIELD: &str = "eslintConfig";
