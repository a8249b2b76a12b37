//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, factory construction, and output formatting.

use crate::error::CliError;
use eslintrc::path::absolutize;
use eslintrc::{ConfigFactory, ConfigFragment, ConfigSequence, Reference};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the working directory.
    pub cwd: Option<PathBuf>,

    /// Load plugins from this directory.
    pub resolve_plugins_relative_to: Option<PathBuf>,
}

/// The working directory: `--cwd` made absolute, or the process's.
pub fn working_directory(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let current = env::current_dir()?;
    Ok(match &global.cwd {
        Some(cwd) => absolutize(cwd, &current),
        None => current,
    })
}

/// Resolve a path against the working directory, using it if not specified.
///
/// Paths are made absolute lexically; symlinks are not followed.
pub fn resolve_path(path: Option<&Path>, cwd: &Path) -> PathBuf {
    match path {
        Some(path) => absolutize(path, cwd),
        None => cwd.to_path_buf(),
    }
}

/// Build a config factory from the global options.
pub fn build_factory(global: &GlobalOptions) -> Result<ConfigFactory, CliError> {
    let cwd = working_directory(global)?;
    Ok(ConfigFactory::builder()
        .with_cwd(cwd)
        .with_resolve_plugins_relative_to(global.resolve_plugins_relative_to.clone())
        .build())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

fn describe_reference<D>(reference: &Reference<D>) -> String {
    match reference.error() {
        None => match reference.file_path() {
            Some(path) => format!("{} ({})", reference.id(), shorten_path(path)),
            None => reference.id().to_string(),
        },
        Some(error) => format!("{} (failed: {})", reference.id(), error.root_cause()),
    }
}

/// Render one fragment as an indented block.
pub fn format_fragment(index: usize, fragment: &ConfigFragment) -> String {
    let mut out = format!("{index}. {}\n", fragment.name());
    if let Some(path) = fragment.file_path() {
        out.push_str(&format!("   file: {}\n", shorten_path(path)));
    }
    if let Some(criteria) = fragment.criteria() {
        out.push_str(&format!("   applies to: {criteria}\n"));
    }
    if let Some(parser) = fragment.parser() {
        out.push_str(&format!("   parser: {}\n", describe_reference(parser)));
    }
    if let Some(plugins) = fragment.plugins() {
        let plugins: Vec<_> = plugins.values().map(describe_reference).collect();
        out.push_str(&format!("   plugins: {}\n", plugins.join(", ")));
    }
    if fragment.is_root() {
        out.push_str("   root: true\n");
    }
    let keys: Vec<_> = fragment
        .body()
        .keys()
        .filter(|key| key.as_str() != "root")
        .map(String::as_str)
        .collect();
    if !keys.is_empty() {
        out.push_str(&format!("   keys: {}\n", keys.join(", ")));
    }
    out
}

/// Render fragments in precedence order for humans.
pub fn format_human<'a>(fragments: impl IntoIterator<Item = &'a ConfigFragment>) -> String {
    let blocks: Vec<_> = fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| format_fragment(i + 1, fragment))
        .collect();
    if blocks.is_empty() {
        return "No configuration found\n".to_string();
    }
    blocks.join("\n")
}

/// Render fragments as a pretty-printed JSON array.
pub fn format_json<'a>(
    fragments: impl IntoIterator<Item = &'a ConfigFragment>,
) -> Result<String, CliError> {
    let sequence: ConfigSequence = fragments.into_iter().cloned().collect();
    Ok(serde_json::to_string_pretty(&sequence)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eslintrc::CreateOptions;
    use serde_json::json;

    fn sequence() -> ConfigSequence {
        let factory = ConfigFactory::builder()
            .with_cwd("/project")
            .with_home_dir(None)
            .build();
        let raw = json!({
            "root": true,
            "rules": { "semi": 2 },
            "plugins": ["missing"],
            "overrides": [{ "files": "*.md", "env": { "browser": true } }]
        });
        factory
            .create(raw.as_object().cloned(), CreateOptions::default())
            .unwrap()
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(None, cwd), PathBuf::from("/work"));
        assert_eq!(
            resolve_path(Some(Path::new("a/../b")), cwd),
            PathBuf::from("/work/b")
        );
        assert_eq!(
            resolve_path(Some(Path::new("/abs")), cwd),
            PathBuf::from("/abs")
        );
    }

    #[test]
    fn test_format_human() {
        let output = format_human(&sequence());
        assert!(output.starts_with("1. <input>\n"));
        assert!(output.contains("   plugins: missing (failed: "));
        assert!(output.contains("   root: true\n"));
        assert!(output.contains("   keys: rules\n"));
        assert!(output.contains("2. <input>#overrides[0]\n"));
        assert!(output.contains(r#"   applies to: files:["*.md"]"#));
    }

    #[test]
    fn test_format_fragment_lines() {
        let factory = ConfigFactory::builder()
            .with_cwd("/project")
            .with_home_dir(None)
            .build();
        let raw = json!({ "parser": "missing-parser", "env": { "node": true } });
        let options = CreateOptions {
            file_path: Some(PathBuf::from("/project/.eslintrc.json")),
            ..Default::default()
        };
        let sequence = factory.create(raw.as_object().cloned(), options).unwrap();
        let fragment = sequence.iter().next().unwrap();

        let lines: Vec<_> = format_fragment(3, fragment).lines().map(str::to_string).collect();
        assert_eq!(lines[0], "3. .eslintrc.json");
        assert_eq!(lines[1], format!("   file: {}", shorten_path(Path::new("/project/.eslintrc.json"))));
        assert!(lines[2].starts_with("   parser: missing-parser (failed: "));
        assert!(lines[3].starts_with("   keys: ") && lines[3].contains("env"));
        assert!(lines[3].ends_with(|c: char| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_format_human_empty() {
        assert_eq!(format_human(&ConfigSequence::default()), "No configuration found\n");
    }

    #[test]
    fn test_format_json() {
        let output = format_json(&sequence()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], json!("<input>"));
        assert_eq!(value[0]["plugins"]["missing"]["id"], json!("missing"));
        assert!(value[0]["plugins"]["missing"]["error"].is_string());
        assert_eq!(value[1]["kind"], json!("config"));
    }
}
