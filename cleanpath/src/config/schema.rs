//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::platform::{HostPlatform, Platform, SystemPlatform};

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessor methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use cleanpath::config::{Config, PlatformChoice};
/// use cleanpath::Platform;
///
/// let config = Config {
///     platform: Some(PlatformChoice::Windows),
///     ..Default::default()
/// };
/// assert_eq!(config.host_platform(), Platform::Windows);
/// assert!(!config.fail_on_warning());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Slash convention to normalize for.
    pub platform: Option<PlatformChoice>,

    /// Default output format for the `parse` command.
    pub output: Option<OutputFormat>,

    /// Treat path warnings as failures.
    pub fail_on_warning: Option<bool>,
}

impl Config {
    /// The host platform this configuration selects, detecting it when the
    /// choice is `auto` or unset.
    #[must_use]
    pub fn host_platform(&self) -> Platform {
        self.platform.unwrap_or_default().resolve()
    }

    /// The configured output format, or [`OutputFormat::Plain`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Whether warnings should make a command fail. Defaults to `false`.
    #[must_use]
    pub fn fail_on_warning(&self) -> bool {
        self.fail_on_warning.unwrap_or(false)
    }
}

/// Platform selection as written in configuration: a fixed convention or
/// `auto` to follow the running system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
    /// Detect from the operating system.
    #[default]
    Auto,
    /// Always normalize for Windows.
    Windows,
    /// Always normalize for Unix.
    Unix,
}

impl PlatformChoice {
    /// Turns the choice into a concrete platform.
    #[must_use]
    pub fn resolve(self) -> Platform {
        match self {
            Self::Auto => SystemPlatform.platform(),
            Self::Windows => Platform::Windows,
            Self::Unix => Platform::Unix,
        }
    }
}

impl fmt::Display for PlatformChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

impl FromStr for PlatformChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        Ok(match s.parse::<Platform>()? {
            Platform::Windows => Self::Windows,
            Platform::Unix => Self::Unix,
        })
    }
}
