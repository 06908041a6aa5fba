//! Configuration system for cleanpath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CLEANPATH_*`)
//! 3. Private project config (`cleanpath.local.yaml`)
//! 4. Project config (`cleanpath.yaml`)
//! 5. User config (`~/.cleanpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use cleanpath::config::ConfigBuilder;
//! use cleanpath::PathParser;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let parser = PathParser::new(config.host_platform());
//! println!("{}", parser.clean("C:/Users/me/notes.txt"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, PlatformChoice};
