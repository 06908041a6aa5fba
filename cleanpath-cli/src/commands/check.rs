//! Check command implementation.

use crate::error::CliError;
use crate::utils::{
    collect_inputs, load_configuration, parse_inputs, report_warnings, warnings_to_result,
    GlobalOptions,
};
use clap::Args;

/// Fail if any path carries a warning.
///
/// Exits with code 1 when at least one path would produce a warning on the
/// configured host platform. Prints nothing on stdout.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to check (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let inputs = collect_inputs(self.paths)?;
        let parsed = parse_inputs(&config, &inputs);

        let warnings = report_warnings(global, &parsed);
        warnings_to_result(warnings, parsed.len())?;

        global
            .logger
            .info(&format!("{} path(s) checked, no warnings", parsed.len()));
        Ok(())
    }
}
