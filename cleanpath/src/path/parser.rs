//! Classification and decomposition of raw path strings.
//!
//! Parsing runs in a fixed order because later steps depend on the
//! classification made by earlier ones:
//!
//! 1. Every `\` is turned into `/` in a working copy (the raw input is kept).
//! 2. The working copy is classified as a URL, a server (UNC) path, a Windows
//!    drive path or a plain Unix path, which fixes the prefix.
//! 3. The filename is cut from the end and split into name and extension on
//!    the first dot.
//! 4. What remains between prefix and filename is the directory; runs of
//!    slashes are collapsed.
//! 5. Slash direction and prefix are then adjusted for the file type and the
//!    host platform.

use crate::platform::{HostPlatform, Platform, SystemPlatform};

use super::types::{FileType, ParsedPath};

/// Warning attached to drive-letter paths parsed for a non-Windows host.
pub const WINDOWS_ON_NON_WINDOWS: &str = "Warning: Windows path on non Windows system";

/// Schemes recognised as URLs. Matching is case-sensitive.
const URL_SCHEMES: [&str; 3] = ["https", "http", "ftp"];

const SERVER_PREFIX: &str = "//";
const WINDOWS_SERVER_PREFIX: &str = "\\\\";

/// Parses raw path strings against a host platform convention.
///
/// The host is queried once for every string parsed, so a parser built on
/// [`SystemPlatform`] always reflects the machine it runs on while one built
/// on a fixed [`Platform`] gives reproducible results.
///
/// # Examples
///
/// ```
/// use cleanpath::{FileType, PathParser, Platform};
///
/// let parser = PathParser::new(Platform::Windows);
/// let parsed = parser.parse("//test/one/two/three.txt");
///
/// assert_eq!(parsed.file_type(), FileType::Server);
/// assert_eq!(parsed.prefix(), "\\\\");
/// assert_eq!(parsed.path(), "test\\one\\two\\");
/// assert_eq!(parsed.format(), "\\\\test\\one\\two\\three.txt");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParser<H = SystemPlatform> {
    host: H,
}

impl PathParser<SystemPlatform> {
    /// A parser that follows the operating system it runs on.
    #[must_use]
    pub const fn system() -> Self {
        Self {
            host: SystemPlatform,
        }
    }
}

impl<H: HostPlatform> PathParser<H> {
    /// Creates a parser that asks `host` for the slash convention.
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the host platform source.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Parses `raw` into its components. Never fails.
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedPath {
        parse(raw, self.host.platform())
    }

    /// Parses an optional input, treating `None` as the empty string.
    #[must_use]
    pub fn parse_opt(&self, raw: Option<&str>) -> ParsedPath {
        self.parse(raw.unwrap_or_default())
    }

    /// Parses `raw` and returns its formatted form.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        self.parse(raw).format()
    }
}

/// Parses `raw` for the given host convention.
///
/// # Examples
///
/// ```
/// use cleanpath::path::parse;
/// use cleanpath::{FileType, Platform};
///
/// let parsed = parse("https://test/one/two//three.html", Platform::Unix);
/// assert_eq!(parsed.file_type(), FileType::Url);
/// assert_eq!(parsed.prefix(), "https://");
/// assert_eq!(parsed.path(), "test/one/two/");
/// assert_eq!(parsed.name(), "three");
/// assert_eq!(parsed.extension(), "html");
/// ```
#[must_use]
pub fn parse(raw: &str, client: Platform) -> ParsedPath {
    let work = raw.replace('\\', "/");

    let (mut file_type, mut prefix) = classify(&work);

    let candidate = filename_candidate(&work, &prefix);
    let (name, extension) = candidate.split_once('.').unwrap_or((candidate, ""));

    let mut path = collapse_slashes(&work[prefix.len()..work.len() - candidate.len()]);
    let mut error = String::new();

    if file_type == FileType::Windows {
        path = to_backslashes(&path);
        if !client.is_windows() {
            log::debug!("drive-letter path '{raw}' parsed for a {client} host");
            error = WINDOWS_ON_NON_WINDOWS.to_string();
        }
    }

    // Bare paths are taken to be host-native on Windows.
    if client.is_windows() && prefix.is_empty() {
        path = to_backslashes(&path);
        file_type = FileType::Windows;
    }

    if matches!(file_type, FileType::Server | FileType::Url) {
        if let Some(rest) = path.strip_prefix('/') {
            path = rest.to_string();
        }
    }

    if client.is_windows() && file_type == FileType::Server {
        path = to_backslashes(&path);
        prefix = WINDOWS_SERVER_PREFIX.to_string();
    }

    ParsedPath {
        raw: raw.to_string(),
        file_type,
        client,
        prefix,
        path,
        name: name.to_string(),
        extension: extension.to_string(),
        error,
    }
}

/// Parses `raw` and returns the formatted path.
///
/// # Examples
///
/// ```
/// use cleanpath::{clean_path, Platform};
///
/// assert_eq!(
///     clean_path("C:/not/correct/for/windows/document.txt", Platform::Windows),
///     "C:\\not\\correct\\for\\windows\\document.txt"
/// );
/// ```
#[must_use]
pub fn clean_path(raw: &str, client: Platform) -> String {
    parse(raw, client).format()
}

fn classify(work: &str) -> (FileType, String) {
    for scheme in URL_SCHEMES {
        if work
            .strip_prefix(scheme)
            .is_some_and(|rest| rest.starts_with("://"))
        {
            return (FileType::Url, format!("{scheme}://"));
        }
    }

    if work.starts_with(SERVER_PREFIX) {
        return (FileType::Server, SERVER_PREFIX.to_string());
    }

    let mut chars = work.chars();
    if let (Some(letter), Some(':')) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() {
            return (FileType::Windows, work[..2].to_string());
        }
    }

    (FileType::Unix, String::new())
}

/// Text that is treated as the filename, or empty when the string has no dot.
///
/// The candidate never overlaps the prefix: URL and server prefixes end in a
/// slash and a drive prefix is skipped explicitly when no slash follows it.
fn filename_candidate<'a>(work: &'a str, prefix: &str) -> &'a str {
    if !work.contains('.') {
        return "";
    }
    match work.rfind('/') {
        Some(idx) => &work[idx + 1..],
        None => &work[prefix.len()..],
    }
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_slash = false;
    for c in s.chars() {
        let is_slash = c == '/';
        if !(is_slash && previous_slash) {
            out.push(c);
        }
        previous_slash = is_slash;
    }
    out
}

fn to_backslashes(s: &str) -> String {
    s.replace('/', "\\")
}
