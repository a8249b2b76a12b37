//! Path helpers shared by the loaders and resolvers.
//!
//! Everything here is lexical: nothing touches the filesystem. Paths are
//! made absolute against an explicit base (the factory's working directory
//! or a config file's directory) rather than the process working directory.

pub mod normalize;

use std::path::Path;

pub use normalize::{absolutize, resolve_components};

/// Check whether a specifier names a file rather than a package.
///
/// A file path is absolute or starts with `./`, `../`, `.\` or `..\`.
///
/// # Examples
///
/// ```
/// use eslintrc::path::is_file_path;
///
/// assert!(is_file_path("./base.json"));
/// assert!(is_file_path("../base.json"));
/// assert!(!is_file_path("eslint-config-airbnb"));
/// assert!(!is_file_path("@scope/config"));
/// ```
#[must_use]
pub fn is_file_path(spec: &str) -> bool {
    Path::new(spec).is_absolute()
        || ["./", "../", ".\\", "..\\"]
            .iter()
            .any(|prefix| spec.starts_with(prefix))
}

/// Render `path` relative to `base` for breadcrumbs, falling back to the
/// full path when it lies outside `base`.
///
/// # Examples
///
/// ```
/// use eslintrc::path::display_name;
/// use std::path::Path;
///
/// assert_eq!(display_name(Path::new("/repo/a/.eslintrc"), Path::new("/repo")), "a/.eslintrc");
/// assert_eq!(display_name(Path::new("/etc/.eslintrc"), Path::new("/repo")), "/etc/.eslintrc");
/// ```
#[must_use]
pub fn display_name(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            relative.to_string_lossy().replace('\\', "/")
        }
        _ => path.display().to_string(),
    }
}
