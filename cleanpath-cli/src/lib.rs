//! Library exports for cleanpath-cli.
//!
//! Exposes the CLI definition so that documentation tooling can render it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
