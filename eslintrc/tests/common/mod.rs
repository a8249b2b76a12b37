//! Common test utilities for integration tests.
//!
//! This module provides a temporary project tree to write config files
//! into, and a factory rooted at it.

use std::fs;
use std::path::{Path, PathBuf};

use eslintrc::{ConfigFactory, ConfigFactoryBuilder, ConfigSequence};
use serde_json::Value;
use tempfile::TempDir;

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("failed to create directories");
        fs::write(path, contents).expect("failed to write file");
        self
    }

    /// Creates the directory `relative`.
    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).expect("failed to create directory");
        self
    }

    /// Installs a JSON plugin package under `node_modules`.
    pub fn install_plugin(&self, package: &str, exports: &Value) -> &Self {
        self.write(
            &format!("node_modules/{package}/package.json"),
            &format!(r#"{{ "name": "{package}", "main": "index.json" }}"#),
        );
        self.write(&format!("node_modules/{package}/index.json"), &exports.to_string())
    }

    /// A builder rooted at the project, with personal config disabled.
    pub fn builder(&self) -> ConfigFactoryBuilder {
        ConfigFactory::builder()
            .with_cwd(self.root())
            .with_home_dir(None)
    }

    /// A factory rooted at the project, with personal config disabled.
    pub fn factory(&self) -> ConfigFactory {
        self.builder().build()
    }
}

/// The values a rule takes across a sequence, in precedence order.
#[allow(dead_code)]
pub fn rule_values(sequence: &ConfigSequence, file: &Path, rule: &str) -> Vec<Value> {
    sequence
        .matching(file)
        .filter_map(|fragment| fragment.body().get("rules")?.get(rule).cloned())
        .collect()
}

/// The fragment names of a sequence.
#[allow(dead_code)]
pub fn names(sequence: &ConfigSequence) -> Vec<String> {
    sequence.iter().map(|f| f.name().to_string()).collect()
}
