//! Command to validate a cleanpath configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use cleanpath::config::ConfigLoader;
use std::path::PathBuf;

/// Validate a cleanpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => {
                global.logger.info(&format!(
                    "platform: {}, output: {}, fail_on_warning: {}",
                    config.platform.unwrap_or_default(),
                    config.output_format(),
                    config.fail_on_warning()
                ));
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                global.logger.error(&e.to_string());
                Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ))
            }
        }
    }
}
