//! Main entry point for the cleanpath CLI.
//!
//! This is the command-line interface to the cleanpath library. It provides
//! commands for working with path strings:
//! - `clean`: Print the cleaned form of each path
//! - `parse`: Print the decomposed form of each path
//! - `check`: Fail if any path carries a warning
//! - `validate`: Validate a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = cleanpath::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        platform: cli.platform,
        config_dir: cli.config_dir,
        logger,
    };

    let result = match cli.command {
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
