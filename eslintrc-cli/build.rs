//! Build script for eslintrc-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("eslintrc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect cascading lint configuration")
        .long_about(
            "Command-line tool for resolving cascading lint configuration into ordered fragments",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Resolve relative paths and configs from this directory")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("resolve-plugins-relative-to")
                .long("resolve-plugins-relative-to")
                .help("Load plugins from this directory instead of the declaring config's")
                .value_name("DIR")
                .global(true)
                .env("ESLINTRC_RESOLVE_PLUGINS_RELATIVE_TO"),
        )
        .subcommands([
            Command::new("resolve")
                .about("Show the configuration fragments that apply to a file or directory")
                .long_about(
                    "Resolve the directory cascade for a path and list its fragments. \
                     Only JSON and YAML configuration files are evaluated; a .eslintrc.js \
                     found along the cascade makes resolution fail",
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Load a configuration file and everything it extends"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("eslintrc.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
