//! Ordered fragment sequences.
//!
//! Order is precedence: when a consumer merges the fragments that apply to
//! a file, later fragments win over earlier ones.

use std::path::Path;

use serde::Serialize;

use crate::fragment::ConfigFragment;

/// An ordered list of configuration fragments.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigSequence {
    fragments: Vec<ConfigFragment>,
}

impl ConfigSequence {
    /// Create a sequence from fragments, in precedence order.
    #[must_use]
    pub fn new(fragments: Vec<ConfigFragment>) -> Self {
        Self { fragments }
    }

    /// Combine `fragments` with a `parent` sequence.
    ///
    /// Without fragments the parent is returned unchanged (or an empty
    /// sequence). Otherwise the parent's fragments are placed in front,
    /// unless the new fragments are marked root.
    ///
    /// # Examples
    ///
    /// ```
    /// use eslintrc::ConfigSequence;
    ///
    /// let empty = ConfigSequence::assemble(None, None);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn assemble(fragments: Option<Vec<ConfigFragment>>, parent: Option<&ConfigSequence>) -> Self {
        let Some(fragments) = fragments else {
            return parent.cloned().unwrap_or_default();
        };

        let own = Self::new(fragments);
        match parent {
            Some(parent) if !own.is_root() => {
                let mut assembled = parent.fragments.clone();
                assembled.extend(own.fragments);
                Self::new(assembled)
            }
            _ => own,
        }
    }

    /// The fragments, in precedence order.
    pub fn fragments(&self) -> &[ConfigFragment] {
        &self.fragments
    }

    /// Take the fragments out of the sequence.
    pub fn into_fragments(self) -> Vec<ConfigFragment> {
        self.fragments
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the sequence has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether any fragment sets `root: true`.
    pub fn is_root(&self) -> bool {
        self.fragments.iter().any(ConfigFragment::is_root)
    }

    /// Iterate over the fragments in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigFragment> {
        self.fragments.iter()
    }

    /// The fragments that apply to `path`, in precedence order.
    pub fn matching<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a ConfigFragment> + 'a {
        self.fragments.iter().filter(move |fragment| fragment.matches(path))
    }

    /// Put `earlier` in front of this sequence.
    pub(crate) fn prepend(&mut self, earlier: Vec<ConfigFragment>) {
        self.fragments.splice(0..0, earlier);
    }
}

impl FromIterator<ConfigFragment> for ConfigSequence {
    fn from_iter<I: IntoIterator<Item = ConfigFragment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ConfigSequence {
    type Item = ConfigFragment;
    type IntoIter = std::vec::IntoIter<ConfigFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigSequence {
    type Item = &'a ConfigFragment;
    type IntoIter = std::slice::Iter<'a, ConfigFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
