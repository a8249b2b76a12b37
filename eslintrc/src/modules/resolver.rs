//! Node-style module resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::ModuleResolver;
use crate::error::{Error, Result};
use crate::path::{absolutize, is_file_path};

/// Extensions tried when a request names a file without one.
const EXTENSIONS: &[&str] = &["js", "json"];

/// Resolves specifiers the way Node's `require.resolve` does for
/// CommonJS packages.
///
/// File-path requests are joined to the base directory. Package requests
/// are looked up in `node_modules` of the base directory and each of its
/// ancestors. A candidate is tried as a file (as-is, then with `.js` and
/// `.json`), then as a package directory (`package.json#main`, then
/// `index.js` and `index.json`).
///
/// # Examples
///
/// ```no_run
/// use eslintrc::modules::{ModuleResolver, NodeModuleResolver};
/// use std::path::Path;
///
/// let resolver = NodeModuleResolver::new();
/// let path = resolver.resolve("eslint-plugin-react", Path::new("/repo")).unwrap();
/// println!("{}", path.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeModuleResolver;

impl NodeModuleResolver {
    /// Create a new resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn resolve_candidate(candidate: &Path) -> Result<Option<PathBuf>> {
        if let Some(file) = Self::resolve_file(candidate) {
            return Ok(Some(file));
        }
        Self::resolve_directory(candidate)
    }

    fn resolve_file(candidate: &Path) -> Option<PathBuf> {
        if candidate.is_file() {
            return Some(candidate.to_path_buf());
        }
        let name = candidate.file_name()?.to_string_lossy().into_owned();
        EXTENSIONS
            .iter()
            .map(|ext| candidate.with_file_name(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }

    fn resolve_directory(dir: &Path) -> Result<Option<PathBuf>> {
        if !dir.is_dir() {
            return Ok(None);
        }

        let manifest = dir.join("package.json");
        if manifest.is_file() {
            let contents =
                fs::read_to_string(&manifest).map_err(|e| Error::io(&manifest, e))?;
            let package: Value =
                serde_json::from_str(&contents).map_err(|e| Error::ConfigParse {
                    path: manifest.clone(),
                    message: e.to_string(),
                })?;
            if let Some(main) = package.get("main").and_then(Value::as_str) {
                let entry = absolutize(Path::new(main), dir);
                if let Some(file) = Self::resolve_file(&entry) {
                    return Ok(Some(file));
                }
                if let Some(index) = Self::resolve_file(&entry.join("index")) {
                    return Ok(Some(index));
                }
            }
        }

        Ok(Self::resolve_file(&dir.join("index")))
    }
}

impl ModuleResolver for NodeModuleResolver {
    fn resolve(&self, request: &str, base_dir: &Path) -> Result<PathBuf> {
        let found = if is_file_path(request) {
            Self::resolve_candidate(&absolutize(Path::new(request), base_dir))?
        } else {
            let mut found = None;
            for dir in base_dir.ancestors() {
                if dir.file_name().is_some_and(|name| name == "node_modules") {
                    continue;
                }
                let candidate = dir.join("node_modules").join(request);
                if let Some(path) = Self::resolve_candidate(&candidate)? {
                    found = Some(path);
                    break;
                }
            }
            found
        };

        match found {
            Some(path) => {
                log::debug!("Resolved module '{request}' to {}", path.display());
                Ok(path)
            }
            None => Err(Error::ModuleNotFound {
                request: request.to_string(),
                base_dir: base_dir.to_path_buf(),
            }),
        }
    }
}
