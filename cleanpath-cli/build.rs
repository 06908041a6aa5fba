//! Build script for cleanpath-cli.
//!
//! Generates the `cleanpath.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    let paths = || {
        Arg::new("paths")
            .value_name("PATHS")
            .num_args(0..)
            .help("Paths to process (read from stdin, one per line, when omitted)")
    };

    Command::new("cleanpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify and canonicalize path strings")
        .long_about(
            "Classify path strings as URL, server, Windows or Unix paths and print \
             them with duplicate separators removed and slashes matching the host platform",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Slash convention to normalize for")
                .value_name("PLATFORM")
                .value_parser(["auto", "windows", "unix"])
                .global(true)
                .env("CLEANPATH_PLATFORM"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("CLEANPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("clean")
                .about("Print the cleaned form of each path")
                .arg(paths()),
            Command::new("parse")
                .about("Print the decomposed form of each path")
                .arg(paths())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["plain", "human", "json", "dump"]),
                ),
            Command::new("check")
                .about("Fail if any path carries a warning")
                .arg(paths()),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("cleanpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
