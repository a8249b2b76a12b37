//! Command to validate a configuration file.
//!
//! Validation loads the file and resolves everything it extends, so a
//! broken shareable config or a cycle is reported too. Plugins that fail
//! to load are reported as warnings.

use crate::error::CliError;
use crate::utils::{build_factory, resolve_path, GlobalOptions};
use clap::Args;
use eslintrc::ConfigFragment;
use std::path::PathBuf;

/// Validate a configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Treat plugins and parsers that fail to load as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = build_factory(global)?;
        let path = resolve_path(Some(&self.config_path), factory.cwd());

        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let sequence = match factory.load_file(&path, None) {
            Ok(sequence) => sequence,
            Err(e) => {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ));
            }
        };

        let failures: Vec<String> = sequence.iter().flat_map(reference_failures).collect();
        for failure in &failures {
            eprintln!("Warning: {failure}");
        }
        if self.strict && !failures.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "{} reference(s) failed to load",
                failures.len()
            )));
        }

        if !global.quiet {
            println!(
                "Configuration is valid ({} fragment{})",
                sequence.len(),
                if sequence.len() == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }
}

fn reference_failures(fragment: &ConfigFragment) -> Vec<String> {
    let parser = fragment
        .parser()
        .and_then(|parser| Some(format!("parser {}", parser.error()?)));
    let plugins = fragment
        .plugins()
        .into_iter()
        .flat_map(|plugins| plugins.values())
        .filter_map(|plugin| Some(format!("plugin {}", plugin.error()?)));

    parser
        .into_iter()
        .chain(plugins)
        .map(|failure| format!("{failure} (in {})", fragment.name()))
        .collect()
}
