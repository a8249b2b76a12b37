//! Module resolution and evaluation collaborators.
//!
//! Configs refer to shareable configs, plugins and parsers by module
//! specifier. Turning a specifier into a file is the job of a
//! [`ModuleResolver`]; turning that file into a value is the job of a
//! [`ModuleLoader`]. Both are traits so hosts can substitute their own.
//!
//! # Trust boundary
//!
//! Evaluating a module may execute third-party code synchronously while a
//! configuration is being resolved: dynamic config files, plugins and
//! parsers all run at load time, and downstream behavior depends on that.
//! The default [`StaticModuleLoader`] only reads JSON modules; a host that
//! embeds a JavaScript runtime supplies its own [`ModuleLoader`] and with it
//! takes on that trust decision.

mod loader;
mod resolver;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

pub use loader::StaticModuleLoader;
pub use resolver::NodeModuleResolver;

/// Resolves a module specifier to a file on disk.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleResolver: Send + Sync {
    /// Resolve `request` starting from the directory `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ModuleNotFound`] when no file matches, or
    /// another error if the filesystem could not be read.
    fn resolve(&self, request: &str, base_dir: &Path) -> Result<PathBuf>;
}

/// Evaluates a module file and returns its exports.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleLoader: Send + Sync {
    /// Evaluate the module at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the module cannot be read or evaluated.
    fn load(&self, path: &Path) -> Result<Value>;
}
