//! Configuration fragments.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config::RawConfig;
use crate::matcher::MatchPredicate;
use crate::reference::{ParserReference, PluginReferences};

/// Where a fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// Written in a config, or inherited through `extends`.
    #[default]
    Config,
    /// Synthesized for a plugin processor that handles a file extension.
    ImplicitProcessor,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::ImplicitProcessor => write!(f, "implicit-processor"),
        }
    }
}

/// One flattened unit of configuration.
///
/// A fragment never carries `extends`, `overrides`, `files` or
/// `excludedFiles`: those are expanded into further fragments and into the
/// fragment's criteria. Parser and plugin names are replaced by loaded
/// references.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    kind: FragmentKind,
    name: String,
    file_path: Option<PathBuf>,
    criteria: Option<MatchPredicate>,
    body: RawConfig,
    parser: Option<ParserReference>,
    plugins: Option<PluginReferences>,
}

impl ConfigFragment {
    pub(crate) fn new(
        kind: FragmentKind,
        name: String,
        file_path: Option<PathBuf>,
        body: RawConfig,
        parser: Option<ParserReference>,
        plugins: Option<PluginReferences>,
    ) -> Self {
        Self {
            kind,
            name,
            file_path,
            criteria: None,
            body,
            parser,
            plugins,
        }
    }

    /// Whether the fragment was written or synthesized.
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The cascade breadcrumb, e.g. `.eslintrc.json » plugin:react/recommended`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file the fragment was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Which files the fragment applies to; `None` applies to all.
    pub fn criteria(&self) -> Option<&MatchPredicate> {
        self.criteria.as_ref()
    }

    /// The remaining settings: `env`, `rules`, `settings` and so on.
    pub fn body(&self) -> &RawConfig {
        &self.body
    }

    /// The resolved parser, if the fragment names one.
    pub fn parser(&self) -> Option<&ParserReference> {
        self.parser.as_ref()
    }

    /// The resolved plugins, if the fragment names any.
    pub fn plugins(&self) -> Option<&PluginReferences> {
        self.plugins.as_ref()
    }

    /// Whether the body sets `root: true`.
    pub fn is_root(&self) -> bool {
        self.body.get("root") == Some(&Value::Bool(true))
    }

    /// Whether the fragment applies to `path`.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        self.criteria
            .as_ref()
            .map_or(true, |criteria| criteria.test(path))
    }

    /// Scope the fragment by an enclosing override's predicate.
    pub(crate) fn restrict(&mut self, predicate: &MatchPredicate) {
        self.criteria = MatchPredicate::and(self.criteria.take(), Some(predicate.clone()));
    }
}
