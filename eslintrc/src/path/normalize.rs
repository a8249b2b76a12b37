//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Converting relative paths to absolute paths against a base directory
//! - Resolving `.` and `..` components without touching the filesystem

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components lexically.
///
/// A `..` that would climb above the root is dropped, the same way the
/// filesystem treats `/..` as `/`.
///
/// # Examples
///
/// ```
/// use eslintrc::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../../c")), PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !has_root {
                    // relative path climbing above its start keeps the `..`
                    result.push("..");
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Make `path` absolute against `base` and resolve its components.
///
/// # Examples
///
/// ```
/// use eslintrc::path::normalize::absolutize;
/// use std::path::Path;
///
/// let abs = absolutize(Path::new("../shared/base.json"), Path::new("/repo/app"));
/// assert_eq!(abs, Path::new("/repo/shared/base.json"));
/// ```
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&base.join(path))
    }
}
