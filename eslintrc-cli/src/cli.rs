//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting cascading lint configuration.
#[derive(Parser)]
#[command(name = "eslintrc")]
#[command(version, about = "Inspect cascading lint configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Resolve relative paths and configs from this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub cwd: Option<PathBuf>,

    /// Load plugins from this directory instead of the declaring config's
    #[arg(
        long,
        value_name = "DIR",
        global = true,
        env = "ESLINTRC_RESOLVE_PLUGINS_RELATIVE_TO"
    )]
    pub resolve_plugins_relative_to: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the configuration fragments that apply to a file or directory
    ///
    /// Only JSON and YAML configuration files are evaluated. A `.eslintrc.js`
    /// found along the directory cascade makes resolution fail.
    Resolve(ResolveCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
