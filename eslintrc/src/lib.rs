#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # eslintrc
//!
//! A library for resolving cascading lint configuration.
//!
//! Configuration files found in a directory and its ancestors are loaded,
//! their `extends`, `overrides`, parsers and plugins are resolved, and the
//! result is flattened into an ordered sequence of fragments. Later
//! fragments take precedence over earlier ones; each fragment may carry a
//! predicate restricting the files it applies to.
//!
//! ## Core Types
//!
//! - [`ConfigFactory`] and [`ConfigFactoryBuilder`]: Entry points for resolution
//! - [`ConfigSequence`] and [`ConfigFragment`]: The flattened result
//! - [`MatchPredicate`]: Glob-based file applicability
//! - [`ConfigNormalizer`] and [`NormalizeContext`]: Flattening of a single config
//! - [`ReferenceLoader`] and [`Reference`]: Parser and plugin loading
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use eslintrc::{ConfigFactory, CreateOptions};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let factory = ConfigFactory::builder()
//!     .with_cwd("/project")
//!     .with_home_dir(None)
//!     .build();
//!
//! let raw = json!({
//!     "rules": { "semi": "error" },
//!     "overrides": [{ "files": "*.test.js", "env": { "jest": true } }]
//! });
//! let sequence = factory
//!     .create(raw.as_object().cloned(), CreateOptions::default())
//!     .unwrap();
//!
//! assert_eq!(sequence.len(), 2);
//! let test_file = Path::new("/project/a.test.js");
//! assert_eq!(sequence.matching(test_file).count(), 2);
//! assert_eq!(sequence.matching(Path::new("/project/a.js")).count(), 1);
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod factory;
pub mod fragment;
pub mod logging;
pub mod matcher;
pub mod modules;
pub mod naming;
pub mod normalizer;
pub mod path;
pub mod reference;
pub mod sequence;

// Re-export key types at crate root for convenience
pub use cascade::CascadeOptions;
pub use config::{ConfigFileLoader, ConfigValidator, RawConfig};
pub use error::{Error, Result};
pub use factory::{ConfigFactory, ConfigFactoryBuilder, CreateOptions};
pub use fragment::{ConfigFragment, FragmentKind};
pub use logging::{init_logger, LogLevel, Logger};
pub use matcher::MatchPredicate;
pub use modules::{ModuleLoader, ModuleResolver, NodeModuleResolver, StaticModuleLoader};
pub use normalizer::{ConfigNormalizer, NormalizeContext};
pub use reference::{
    Importer, ParserReference, PluginDefinition, PluginReference, PluginReferences, Reference,
    ReferenceLoader,
};
pub use sequence::ConfigSequence;
