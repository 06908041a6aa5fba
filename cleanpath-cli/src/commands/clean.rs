//! Clean command implementation.
//!
//! Prints the canonical form of each path, one per line. Warnings go to
//! stderr so that stdout can be piped.

use crate::error::CliError;
use crate::utils::{
    collect_inputs, load_configuration, parse_inputs, report_warnings, warnings_to_result,
    GlobalOptions,
};
use clap::Args;

/// Print the cleaned form of each path.
#[derive(Args)]
pub struct CleanCommand {
    /// Paths to clean (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let inputs = collect_inputs(self.paths)?;
        let parsed = parse_inputs(&config, &inputs);

        for path in &parsed {
            println!("{path}");
        }

        let warnings = report_warnings(global, &parsed);
        if config.fail_on_warning() {
            warnings_to_result(warnings, parsed.len())?;
        }

        Ok(())
    }
}
