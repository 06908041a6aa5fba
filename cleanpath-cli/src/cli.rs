//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CleanCommand, CompletionsCommand, ParseCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use cleanpath::config::PlatformChoice;
use std::path::PathBuf;

/// Command-line tool for classifying and canonicalizing path strings.
#[derive(Parser)]
#[command(name = "cleanpath")]
#[command(version, about = "Classify and canonicalize path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Slash convention to normalize for
    #[arg(
        long,
        value_enum,
        value_name = "PLATFORM",
        global = true,
        env = "CLEANPATH_PLATFORM",
        ignore_case = true
    )]
    pub platform: Option<PlatformChoice>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "CLEANPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the cleaned form of each path
    Clean(CleanCommand),

    /// Print the decomposed form of each path
    Parse(ParseCommand),

    /// Fail if any path carries a warning
    Check(CheckCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
