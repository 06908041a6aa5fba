//! Path string classification and canonicalization.
//!
//! A raw path may be written in any of four syntaxes:
//!
//! - **URL**: `https://host/dir/page.html`, `http://…` or `ftp://…`
//! - **Server**: a UNC path such as `\\server\share\file.txt` or `//server/…`
//! - **Windows**: a drive-letter path such as `C:\dir\file.txt` or `D:relative`
//! - **Unix**: anything else, relative or absolute
//!
//! [`PathParser`] splits a string into a prefix (scheme, drive or UNC root), a
//! directory, a name and an extension, normalizing slashes for the host
//! platform along the way. Mixed separators are accepted, duplicate slashes
//! are collapsed, and a warning is recorded when a drive-letter path is parsed
//! for a host that is not Windows. Parsing never fails.
//!
//! # Examples
//!
//! ```
//! use cleanpath::{FileType, PathParser, Platform};
//!
//! let parser = PathParser::new(Platform::Unix);
//!
//! let url = parser.parse("https://test/one/two//three.html");
//! assert_eq!(url.file_type(), FileType::Url);
//! assert_eq!(url.format(), "https://test/one/two/three.html");
//!
//! let drive = parser.parse("X:\\test/test.html");
//! assert_eq!(drive.format(), "X:\\test\\test.html");
//! assert!(drive.has_warning());
//! ```
//!
//! Extensions are split on the first dot of the filename, so
//! `archive.tar.gz` has the name `archive` and the extension `tar.gz`.

mod parser;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use parser::{clean_path, parse, PathParser, WINDOWS_ON_NON_WINDOWS};
pub use types::{FileType, ParsedPath};
