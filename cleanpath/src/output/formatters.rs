//! Output formatter implementations.

use crate::path::ParsedPath;
use crate::Result;

use super::OutputFormatter;

/// Formatter that prints each cleaned path on its own line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, paths: &[ParsedPath]) -> Result<String> {
        Ok(paths
            .iter()
            .map(ParsedPath::format)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &[ParsedPath]) -> Result<String> {
        Ok(serde_json::to_string_pretty(paths)?)
    }
}

/// Formatter that prints the `dump` line of each path.
pub struct DumpFormatter;

impl OutputFormatter for DumpFormatter {
    fn format(&self, paths: &[ParsedPath]) -> Result<String> {
        Ok(paths
            .iter()
            .map(ParsedPath::dump)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, paths: &[ParsedPath]) -> Result<String> {
        if paths.is_empty() {
            return Ok("No paths given.".to_string());
        }

        let blocks: Vec<String> = paths.iter().map(human_block).collect();
        Ok(blocks.join("\n\n"))
    }
}

fn human_block(parsed: &ParsedPath) -> String {
    let mut lines = vec![
        parsed.format(),
        format!("  input:     {:?}", parsed.raw()),
        format!("  type:      {}", parsed.file_type()),
        format!("  prefix:    {:?}", parsed.prefix()),
        format!("  directory: {:?}", parsed.path()),
        format!("  filename:  {:?}", parsed.filename()),
    ];
    if let Some(warning) = parsed.warning() {
        lines.push(format!("  warning:   {warning}"));
    }
    lines.join("\n")
}
