//! Core types for parsed paths.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::platform::Platform;

/// Syntax family a raw path string was recognised as.
///
/// # Examples
///
/// ```
/// use cleanpath::FileType;
///
/// assert_eq!(FileType::Server.to_string(), "SERVER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// Drive-letter path such as `C:\dir\file.txt`.
    Windows,
    /// Plain relative or absolute path with no scheme or drive.
    Unix,
    /// `http://`, `https://` or `ftp://` URL.
    Url,
    /// UNC/server path starting with two slashes.
    Server,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "WINDOWS"),
            Self::Unix => write!(f, "UNIX"),
            Self::Url => write!(f, "URL"),
            Self::Server => write!(f, "SERVER"),
        }
    }
}

/// A path string decomposed into prefix, directory and filename parts.
///
/// Values are built by [`PathParser`](super::PathParser) in a single pass and
/// are never modified afterwards; parse the new source again instead of
/// editing one in place.
///
/// The formatted path is always
/// `prefix + path + name + ("." + extension, when the extension is non-empty)`.
///
/// # Examples
///
/// ```
/// use cleanpath::{FileType, PathParser, Platform};
///
/// let parsed = PathParser::new(Platform::Unix).parse("testing/test.txt");
/// assert_eq!(parsed.file_type(), FileType::Unix);
/// assert_eq!(parsed.path(), "testing/");
/// assert_eq!(parsed.filename(), "test.txt");
/// assert_eq!(parsed.format(), "testing/test.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPath {
    pub(crate) raw: String,
    pub(crate) file_type: FileType,
    #[serde(serialize_with = "serialize_display")]
    pub(crate) client: Platform,
    pub(crate) prefix: String,
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) extension: String,
    pub(crate) error: String,
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    serializer.collect_str(value)
}

impl ParsedPath {
    /// The input exactly as it was supplied.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The syntax family of the input.
    #[must_use]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The host convention that was in effect when the input was parsed.
    #[must_use]
    pub fn client(&self) -> Platform {
        self.client
    }

    /// Scheme, drive or UNC root (`"https://"`, `"C:"`, `"\\\\"`, or empty).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Directory portion, with normalized slashes and a trailing separator
    /// when a filename followed it.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filename stem (everything before the first dot).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension without the leading dot; may itself contain dots.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Advisory warning text, empty when the input raised no concern.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether parsing produced a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::{PathParser, Platform};
    ///
    /// let parsed = PathParser::new(Platform::Unix).parse("C:\\boot.ini");
    /// assert!(parsed.has_warning());
    /// ```
    #[must_use]
    pub fn has_warning(&self) -> bool {
        !self.error.is_empty()
    }

    /// The warning description, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Name and extension joined with a dot (no dot when the extension is empty).
    #[must_use]
    pub fn filename(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// The canonical reconstruction of the path.
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(
            self.prefix.len() + self.path.len() + self.name.len() + self.extension.len() + 1,
        );
        out.push_str(&self.prefix);
        out.push_str(&self.path);
        out.push_str(&self.name);
        if !self.extension.is_empty() {
            out.push('.');
            out.push_str(&self.extension);
        }
        out
    }

    /// Debug listing of every field in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::{PathParser, Platform};
    ///
    /// let parsed = PathParser::new(Platform::Unix).parse("a.b");
    /// assert_eq!(
    ///     parsed.dump(),
    ///     "{raw:a.b,fileType:UNIX,client:UNIX,prefix:,path:,name:a,extension:b,error:}"
    /// );
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        format!(
            "{{raw:{},fileType:{},client:{},prefix:{},path:{},name:{},extension:{},error:{}}}",
            self.raw,
            self.file_type,
            self.client,
            self.prefix,
            self.path,
            self.name,
            self.extension,
            self.error
        )
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
