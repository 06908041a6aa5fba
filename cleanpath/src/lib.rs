#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cleanpath
//!
//! A library for classifying and canonicalizing path strings.
//!
//! Paths arrive in many shapes: Windows drive paths with mixed slashes, UNC
//! server paths, URLs with doubled separators, plain relative names. This
//! library decomposes any of them into a prefix, a directory, a name and an
//! extension, and reassembles a clean path for a chosen host platform.
//!
//! ## Core Types
//!
//! - [`PathParser`] and [`ParsedPath`]: parsing and the parsed result
//! - [`FileType`]: URL, server, Windows or Unix syntax
//! - [`Platform`] and [`HostPlatform`]: the slash convention to normalize for
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cleanpath::{clean_path, FileType, PathParser, Platform};
//!
//! let parser = PathParser::new(Platform::Windows);
//! let parsed = parser.parse("//server/share//docs/report.txt");
//! assert_eq!(parsed.file_type(), FileType::Server);
//! assert_eq!(parsed.format(), "\\\\server\\share\\docs\\report.txt");
//!
//! assert_eq!(clean_path("testing//test.txt", Platform::Unix), "testing/test.txt");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{clean_path, FileType, ParsedPath, PathParser};
pub use platform::{HostPlatform, Platform, SystemPlatform};
