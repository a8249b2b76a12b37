//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Show the configuration fragments that apply to a path
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
