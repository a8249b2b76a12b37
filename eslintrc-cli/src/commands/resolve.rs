//! Command to show the configuration that applies to a path.
//!
//! The directory cascade is resolved first; a `--config` file is placed
//! after it, with higher precedence, unless the cascade is disabled.

use crate::error::CliError;
use crate::utils::{build_factory, format_human, format_json, resolve_path, GlobalOptions};
use clap::{Args, ValueEnum};
use eslintrc::{CascadeOptions, ConfigSequence};
use std::path::PathBuf;

/// Output format for the resolve command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered fragment list (human-readable)
    #[default]
    Human,
    /// JSON array of fragments
    Json,
}

/// Show the configuration fragments that apply to a file or directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// File or directory to resolve configuration for (default: working directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Additional configuration file, applied after the cascade
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not look up configuration files in the directory tree
    #[arg(long)]
    pub no_eslintrc: bool,

    /// Do not fall back to the configuration in the home directory
    #[arg(long)]
    pub no_personal_config: bool,

    /// Show every fragment, not only those that apply to PATH
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = build_factory(global)?;
        let target = resolve_path(self.path.as_deref(), factory.cwd());

        if self.no_eslintrc && self.config.is_none() {
            return Err(CliError::InvalidArguments(
                "--no-eslintrc requires --config".to_string(),
            ));
        }

        let is_file = target.is_file();
        let sequence = if self.no_eslintrc {
            ConfigSequence::default()
        } else {
            let directory = if is_file {
                target.parent().unwrap_or(&target).to_path_buf()
            } else {
                target.clone()
            };
            let options = CascadeOptions {
                parent: None,
                use_personal_config: !self.no_personal_config,
            };
            factory.resolve_directory(&directory, &options)?
        };

        let sequence = match &self.config {
            Some(config) => {
                let extra = factory.load_file(config, None)?;
                ConfigSequence::assemble(Some(extra.into_fragments()), Some(&sequence))
            }
            None => sequence,
        };

        let only_matching = is_file && !self.all;
        let fragments: Vec<_> = if only_matching {
            sequence.matching(&target).collect()
        } else {
            sequence.iter().collect()
        };

        let output = match self.format {
            OutputFormat::Human => format_human(fragments),
            OutputFormat::Json => format_json(fragments)?,
        };
        print!("{output}");
        if self.format == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
