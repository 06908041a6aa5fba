//! Environment variable handling for configuration overrides.
//!
//! This module reads the `CLEANPATH_*` variables that override values from
//! configuration files.

use crate::config::schema::{Config, PlatformChoice};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Selects the host platform (`windows`, `unix` or `auto`).
pub const PLATFORM_ENV: &str = "CLEANPATH_PLATFORM";

/// Selects the default output format.
pub const OUTPUT_ENV: &str = "CLEANPATH_OUTPUT";

/// Makes warnings fatal.
pub const FAIL_ON_WARNING_ENV: &str = "CLEANPATH_FAIL_ON_WARNING";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cleanpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if any value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::read(PLATFORM_ENV) {
            config.platform = Some(Self::parse_with(
                PLATFORM_ENV,
                &value,
                str::parse::<PlatformChoice>,
            )?);
        }

        if let Some(value) = Self::read(OUTPUT_ENV) {
            config.output = Some(Self::parse_with(
                OUTPUT_ENV,
                &value,
                str::parse::<OutputFormat>,
            )?);
        }

        if let Some(value) = Self::read(FAIL_ON_WARNING_ENV) {
            config.fail_on_warning = Some(Self::parse_bool(FAIL_ON_WARNING_ENV, &value)?);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Re-labels a value parse error with the variable it came from.
    fn parse_with<T>(field: &str, value: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        parse(value).map_err(|e| match e {
            Error::Validation { message, .. } => Error::Validation {
                field: field.into(),
                message,
            },
            other => other,
        })
    }

    /// Parse a boolean value from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
