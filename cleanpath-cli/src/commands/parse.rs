//! Parse command implementation.
//!
//! Prints the decomposition of each path in one of the library's output
//! formats.

use crate::error::CliError;
use crate::utils::{
    collect_inputs, load_configuration, parse_inputs, report_warnings, warnings_to_result,
    GlobalOptions,
};
use clap::Args;
use cleanpath::output::OutputFormat;

/// Print the decomposed form of each path.
#[derive(Args)]
pub struct ParseCommand {
    /// Paths to parse (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self.format.unwrap_or_else(|| config.output_format());

        let inputs = collect_inputs(self.paths)?;
        let parsed = parse_inputs(&config, &inputs);

        let output = format.create_formatter().format(&parsed)?;
        if !output.is_empty() {
            println!("{output}");
        }

        // The human and json formats already show the warning inline.
        let warnings = if matches!(format, OutputFormat::Plain) {
            report_warnings(global, &parsed)
        } else {
            parsed.iter().filter(|p| p.has_warning()).count()
        };
        if config.fail_on_warning() {
            warnings_to_result(warnings, parsed.len())?;
        }

        Ok(())
    }
}
