//! Output formatting for parsed paths.
//!
//! This module renders batches of [`ParsedPath`] values as plain cleaned
//! paths, labelled human-readable blocks, JSON, or `dump` lines.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::ParsedPath;
use crate::{Error, Result};

pub use formatters::{DumpFormatter, HumanFormatter, JsonFormatter, PlainFormatter};

/// Trait for formatting parsed paths into an output format.
pub trait OutputFormatter {
    /// Format the given parsed paths into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, paths: &[ParsedPath]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use cleanpath::output::OutputFormat;
///
/// assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::default(), OutputFormat::Plain);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One formatted path per line.
    #[default]
    Plain,
    /// Labelled fields, one block per path.
    Human,
    /// A JSON array of parsed paths.
    Json,
    /// One `{field:value,...}` line per path.
    Dump,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Dump => Box::new(DumpFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "dump" => Ok(Self::Dump),
            _ => Err(Error::Validation {
                field: "output".into(),
                message: format!("unknown output format '{s}' (expected plain, human, json or dump)"),
            }),
        }
    }
}
