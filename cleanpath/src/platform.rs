//! Host platform conventions.
//!
//! The parser needs to know whether the machine the path will be used on
//! expects back slashes (Windows) or forward slashes (everything else). That
//! knowledge is supplied through the [`HostPlatform`] trait so callers can pin
//! it in tests or configuration, or ask the running system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Slash convention of a host platform.
///
/// # Examples
///
/// ```
/// use cleanpath::Platform;
///
/// assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
/// assert_eq!(Platform::Unix.to_string(), "UNIX");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Drive letters and back slashes.
    Windows,
    /// Forward slashes.
    Unix,
}

impl Platform {
    /// Returns the convention of the platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Whether this is the Windows convention.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "WINDOWS"),
            Self::Unix => write!(f, "UNIX"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "unix" | "linux" | "macos" => Ok(Self::Unix),
            _ => Err(Error::Validation {
                field: "platform".into(),
                message: format!("unknown platform '{s}' (expected windows or unix)"),
            }),
        }
    }
}

/// Source of the host platform convention.
///
/// The parser queries this once per parsed string.
pub trait HostPlatform {
    /// Returns the slash convention to normalize for.
    fn platform(&self) -> Platform;
}

impl HostPlatform for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}

/// Queries the operating system the process is running on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemPlatform;

impl HostPlatform for SystemPlatform {
    fn platform(&self) -> Platform {
        if std::env::consts::FAMILY == "windows" {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

impl<H: HostPlatform + ?Sized> HostPlatform for &H {
    fn platform(&self) -> Platform {
        (**self).platform()
    }
}
