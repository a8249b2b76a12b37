//! File-match predicates for override scoping.
//!
//! An override's `files` and `excludedFiles` globs compile into a
//! [`MatchPredicate`], a small expression tree that decides whether a
//! fragment applies to a given file. Nested overrides compose their
//! predicates with [`MatchPredicate::and`].
//!
//! Glob semantics:
//! - dotfiles are matched like any other file;
//! - a pattern without `/` is matched against the file's base name, so
//!   `*.md` matches `docs/guide/intro.md`;
//! - in patterns with `/`, `*` does not cross directory separators.

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// A compiled list of glob patterns relative to a base directory.
#[derive(Debug, Clone)]
pub struct GlobList {
    patterns: Vec<String>,
    base_path: Option<PathBuf>,
    full_path: GlobSet,
    base_name: GlobSet,
}

impl GlobList {
    /// Compile `patterns` relative to `base_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverridePattern`] for absolute patterns or
    /// patterns containing `..`, and [`Error::InvalidGlob`] for patterns
    /// that fail to compile.
    pub fn new(patterns: Vec<String>, base_path: Option<PathBuf>) -> Result<Self> {
        let mut full_path = GlobSetBuilder::new();
        let mut base_name = GlobSetBuilder::new();

        for pattern in &patterns {
            if Path::new(pattern).is_absolute() || pattern.starts_with('/') || pattern.contains("..")
            {
                return Err(Error::InvalidOverridePattern {
                    pattern: pattern.clone(),
                });
            }

            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| Error::InvalidGlob {
                    pattern: pattern.clone(),
                    message: e.kind().to_string(),
                })?;

            if pattern.contains('/') {
                full_path.add(glob);
            } else {
                base_name.add(glob);
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|e| Error::InvalidGlob {
                pattern: patterns.join(", "),
                message: e.to_string(),
            })
        };

        Ok(Self {
            full_path: build(full_path)?,
            base_name: build(base_name)?,
            patterns,
            base_path,
        })
    }

    /// The source patterns, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The directory the patterns are relative to, if any.
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Check whether any pattern matches `path`.
    ///
    /// Absolute paths are tested relative to the base path; an absolute
    /// path outside of it never matches.
    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        let Some(relative) = self.relative_path(path) else {
            return false;
        };
        let name = relative.rsplit('/').next().unwrap_or(relative.as_str());

        self.full_path.is_match(relative.as_str()) || self.base_name.is_match(name)
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = match &self.base_path {
            Some(base) if path.is_absolute() => path.strip_prefix(base).ok()?,
            _ => path,
        };
        Some(relative.to_string_lossy().replace('\\', "/"))
    }
}

impl PartialEq for GlobList {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns && self.base_path == other.base_path
    }
}

/// Decides whether a configuration fragment applies to a file.
///
/// # Examples
///
/// ```
/// use eslintrc::MatchPredicate;
///
/// let predicate = MatchPredicate::build(
///     Some(vec!["*.ts".to_string()]),
///     Some(vec!["*.test.ts".to_string()]),
///     None,
/// )
/// .unwrap()
/// .unwrap();
///
/// assert!(predicate.test("a/b.ts"));
/// assert!(!predicate.test("a/b.test.ts"));
/// assert!(!predicate.test("a/b.js"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPredicate {
    /// Matches when any of the globs matches.
    Include(GlobList),
    /// Matches when none of the globs matches.
    Exclude(GlobList),
    /// Matches when both operands match.
    And(Box<MatchPredicate>, Box<MatchPredicate>),
}

impl MatchPredicate {
    /// Build a predicate from include and exclude glob lists.
    ///
    /// Returns `Ok(None)` when neither list is given: the fragment is
    /// unconstrained. Empty lists count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid (see [`GlobList::new`]).
    pub fn build(
        files: Option<Vec<String>>,
        excluded_files: Option<Vec<String>>,
        base_path: Option<&Path>,
    ) -> Result<Option<Self>> {
        let base_path = base_path.map(Path::to_path_buf);
        let includes = files
            .filter(|patterns| !patterns.is_empty())
            .map(|patterns| GlobList::new(patterns, base_path.clone()))
            .transpose()?
            .map(Self::Include);
        let excludes = excluded_files
            .filter(|patterns| !patterns.is_empty())
            .map(|patterns| GlobList::new(patterns, base_path.clone()))
            .transpose()?
            .map(Self::Exclude);

        Ok(Self::and(includes, excludes))
    }

    /// Compose an outer scope's predicate with an inner one.
    ///
    /// An absent operand is unconstrained, so the other is returned as is.
    #[must_use]
    pub fn and(outer: Option<Self>, inner: Option<Self>) -> Option<Self> {
        match (outer, inner) {
            (Some(outer), Some(inner)) => Some(Self::And(Box::new(outer), Box::new(inner))),
            (outer, None) => outer,
            (None, inner) => inner,
        }
    }

    /// Test whether `path` satisfies the predicate.
    pub fn test(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self {
            Self::Include(globs) => globs.is_match(path),
            Self::Exclude(globs) => !globs.is_match(path),
            Self::And(left, right) => left.test(path) && right.test(path),
        }
    }
}

impl fmt::Display for MatchPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include(globs) => write!(f, "files:{:?}", globs.patterns()),
            Self::Exclude(globs) => write!(f, "!excludedFiles:{:?}", globs.patterns()),
            Self::And(left, right) => write!(f, "{left} && {right}"),
        }
    }
}

impl Serialize for MatchPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
