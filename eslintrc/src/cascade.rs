//! Ancestor-directory cascading.
//!
//! Configs in nearer directories take precedence over configs further up
//! the tree. The walk stops at the first directory whose config sets
//! `root: true`. When no ancestor has a config, the personal config in the
//! home directory is used instead.

use std::path::Path;

use crate::error::Result;
use crate::factory::ConfigFactory;
use crate::fragment::ConfigFragment;
use crate::path::absolutize;
use crate::sequence::ConfigSequence;

/// Options for [`ConfigFactory::cascade`] and
/// [`ConfigFactory::resolve_directory`].
#[derive(Debug, Clone)]
pub struct CascadeOptions {
    /// Sequence to assemble the result onto.
    pub parent: Option<ConfigSequence>,
    /// Fall back to the home directory config when no ancestor has one.
    pub use_personal_config: bool,
}

impl Default for CascadeOptions {
    fn default() -> Self {
        Self {
            parent: None,
            use_personal_config: true,
        }
    }
}

impl ConfigFactory {
    /// Resolve the configs of the ancestors of `start_dir`.
    ///
    /// `start_dir` itself is not searched; see
    /// [`ConfigFactory::resolve_directory`].
    ///
    /// Access denied to a directory ends the walk with what was found so
    /// far.
    ///
    /// # Errors
    ///
    /// Returns any error loading a config found along the way.
    pub fn cascade(&self, start_dir: &Path, options: &CascadeOptions) -> Result<ConfigSequence> {
        let start_dir = absolutize(start_dir, &self.cwd);
        let fragments = self.collect_ancestors(&start_dir, options.use_personal_config)?;
        Ok(assemble(fragments, options.parent.as_ref()))
    }

    /// Resolve the config that applies to files in `dir`: its own config
    /// followed by its ancestors' below it in precedence.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PermissionDenied`] if `dir` itself cannot
    /// be read, or any error loading a config.
    pub fn resolve_directory(&self, dir: &Path, options: &CascadeOptions) -> Result<ConfigSequence> {
        let dir = absolutize(dir, &self.cwd);
        let own = self.find_in_directory(&dir, None)?;

        if let Some(own) = &own {
            if own.iter().any(ConfigFragment::is_root) {
                log::debug!("{} is a root config directory", dir.display());
                return Ok(assemble(own.clone(), options.parent.as_ref()));
            }
        }

        let use_personal_config = options.use_personal_config && own.is_none();
        let mut fragments = self.collect_ancestors(&dir, use_personal_config)?;
        fragments.extend(own.unwrap_or_default());
        Ok(assemble(fragments, options.parent.as_ref()))
    }

    fn collect_ancestors(&self, start_dir: &Path, use_personal_config: bool) -> Result<Vec<ConfigFragment>> {
        let mut accumulated = ConfigSequence::default();
        let mut aborted = false;

        for dir in start_dir.ancestors().skip(1) {
            match self.find_in_directory(dir, None) {
                Ok(Some(fragments)) => {
                    let root = fragments.iter().any(ConfigFragment::is_root);
                    accumulated.prepend(fragments);
                    if root {
                        log::debug!("Stopping cascade at root config in {}", dir.display());
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) if err.is_permission_denied() => {
                    log::warn!("Stopping config cascade: {err}");
                    aborted = true;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        if accumulated.is_empty() && !aborted && use_personal_config {
            if let Some(home) = &self.home_dir {
                log::debug!("No ancestor config, trying personal config in {}", home.display());
                match self.find_in_directory(home, None) {
                    Ok(Some(fragments)) => return Ok(fragments),
                    Ok(None) => {}
                    Err(err) if err.is_permission_denied() => {
                        log::warn!("Skipping personal config: {err}");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(accumulated.into_fragments())
    }
}

fn assemble(fragments: Vec<ConfigFragment>, parent: Option<&ConfigSequence>) -> ConfigSequence {
    let fragments = (!fragments.is_empty()).then_some(fragments);
    ConfigSequence::assemble(fragments, parent)
}
