//! Property-based tests for path parsing.

use super::parser::parse;
use super::types::FileType;
use crate::platform::Platform;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//"), Just("\\/")]
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("https://".to_string()),
        Just("http://".to_string()),
        Just("ftp://".to_string()),
        Just("//".to_string()),
        Just("\\\\".to_string()),
        "[A-Za-z]".prop_map(|letter| format!("{letter}:/")),
    ]
}

fn filename_strategy() -> impl Strategy<Value = String> {
    (segment_strategy(), prop::option::of("[a-z0-9]{1,5}")).prop_map(|(name, ext)| match ext {
        Some(ext) => format!("{name}.{ext}"),
        None => name,
    })
}

/// Paths built from well-formed pieces with messy separators.
fn messy_path_strategy() -> impl Strategy<Value = String> {
    (
        prefix_strategy(),
        prop::collection::vec((segment_strategy(), separator_strategy()), 0..5),
        filename_strategy(),
    )
        .prop_map(|(prefix, dirs, file)| {
            let mut out = prefix;
            for (dir, sep) in dirs {
                out.push_str(&dir);
                out.push_str(sep);
            }
            out.push_str(&file);
            out
        })
}

fn host_strategy() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Unix), Just(Platform::Windows)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing never panics, whatever the input.
    #[test]
    fn parse_total(s in ".*", host in host_strategy()) {
        let parsed = parse(&s, host);
        prop_assert_eq!(parsed.raw(), s.as_str());
    }

    // Formatting a parsed path and parsing it again changes nothing.
    #[test]
    fn reparse_idempotent(s in messy_path_strategy(), host in host_strategy()) {
        let first = parse(&s, host);
        let second = parse(&first.format(), host);

        prop_assert_eq!(first.file_type(), second.file_type());
        prop_assert_eq!(first.prefix(), second.prefix());
        prop_assert_eq!(first.path(), second.path());
        prop_assert_eq!(first.name(), second.name());
        prop_assert_eq!(first.extension(), second.extension());
    }

    // Formatting is a fixed point for arbitrary input too.
    #[test]
    fn format_fixed_point(s in ".*", host in host_strategy()) {
        let once = parse(&s, host).format();
        let twice = parse(&once, host).format();
        prop_assert_eq!(once, twice);
    }

    // The directory never contains a doubled forward slash.
    #[test]
    fn no_duplicate_slashes(s in messy_path_strategy(), host in host_strategy()) {
        let parsed = parse(&s, host);
        prop_assert!(!parsed.path().contains("//"));
    }

    // A Windows host never sees forward slashes outside URLs.
    #[test]
    fn windows_host_uses_backslashes(s in messy_path_strategy()) {
        let parsed = parse(&s, Platform::Windows);
        if parsed.file_type() != FileType::Url {
            prop_assert!(!parsed.path().contains('/'));
        }
    }

    // Only drive-letter paths on non-Windows hosts carry a warning.
    #[test]
    fn warning_only_for_foreign_drive_paths(s in messy_path_strategy(), host in host_strategy()) {
        let parsed = parse(&s, host);
        let expected = parsed.file_type() == FileType::Windows
            && !parsed.prefix().is_empty()
            && host == Platform::Unix;
        prop_assert_eq!(parsed.has_warning(), expected);
    }

    // The prefix, directory and filename reassemble the formatted path.
    #[test]
    fn format_reassembles_parts(s in messy_path_strategy(), host in host_strategy()) {
        let parsed = parse(&s, host);
        let joined = format!("{}{}{}", parsed.prefix(), parsed.path(), parsed.filename());
        prop_assert_eq!(joined, parsed.format());
    }
}
