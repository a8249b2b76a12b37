//! The default module loader.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::ModuleLoader;
use crate::error::{Error, Result};

/// Loads modules without executing code.
///
/// `.json` modules are parsed as strict JSON, the way `require` treats them.
/// Every other module type is refused with [`Error::UnsupportedModule`].
#[derive(Debug, Clone, Default)]
pub struct StaticModuleLoader;

impl StaticModuleLoader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ModuleLoader for StaticModuleLoader {
    fn load(&self, path: &Path) -> Result<Value> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            // a missing file is a miss, not a refusal
            fs::metadata(path).map_err(|e| Error::io(path, e))?;
            return Err(Error::UnsupportedModule {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| Error::InvalidModule {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
