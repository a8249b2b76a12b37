//! Main entry point for the eslintrc CLI.
//!
//! This is the command-line interface for inspecting cascading lint
//! configuration. It provides commands for:
//! - `resolve`: Show the configuration fragments that apply to a path
//! - `validate`: Check a configuration file and everything it extends
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use eslintrc_cli::cli::{Cli, Command};
use eslintrc_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    eslintrc::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        cwd: cli.cwd,
        resolve_plugins_relative_to: cli.resolve_plugins_relative_to,
    };

    // Execute the command
    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
