//! Utility functions for CLI operations.
//!
//! This module gathers what every command needs: the global options,
//! configuration loading, input collection and warning reporting.

use crate::error::CliError;
use cleanpath::config::PlatformChoice;
use cleanpath::{Config, ConfigBuilder, Logger, ParsedPath, PathParser};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Platform requested on the command line or through the environment.
    pub platform: Option<PlatformChoice>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Logger built from `verbose`/`quiet` and the environment.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    if let Some(platform) = global.platform {
        builder = builder.with_config(Config {
            platform: Some(platform),
            ..Default::default()
        });
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!(
        "host platform: {}, output: {}",
        config.host_platform(),
        config.output_format()
    ));

    Ok(config)
}

/// Returns the paths given on the command line, or the lines of stdin when
/// there are none.
pub fn collect_inputs(paths: Vec<String>) -> Result<Vec<String>, CliError> {
    if !paths.is_empty() {
        return Ok(paths);
    }
    read_lines(io::stdin().lock())
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::from)
}

/// Parses every input against the configured host platform.
pub fn parse_inputs(config: &Config, inputs: &[String]) -> Vec<ParsedPath> {
    let parser = PathParser::new(config.host_platform());
    inputs.iter().map(|raw| parser.parse(raw)).collect()
}

/// Reports each warning on stderr and returns how many paths carried one.
pub fn report_warnings(global: &GlobalOptions, parsed: &[ParsedPath]) -> usize {
    parsed
        .iter()
        .filter(|path| global.logger.report(path))
        .count()
}

/// Turns a warning count into the semantic failure shared by `check` and
/// `fail_on_warning`.
pub fn warnings_to_result(warnings: usize, total: usize) -> Result<(), CliError> {
    if warnings == 0 {
        return Ok(());
    }
    Err(CliError::SemanticFailure(format!(
        "{warnings} of {total} path(s) carry warnings"
    )))
}
