//! Integration tests for the layered configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]`
//! because the process environment is shared between test threads.

use cleanpath::config::{Config, ConfigBuilder, ConfigLoader, PlatformChoice};
use cleanpath::output::OutputFormat;
use cleanpath::{PathParser, Platform};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VARS: [&str; 3] = [
    "CLEANPATH_PLATFORM",
    "CLEANPATH_OUTPUT",
    "CLEANPATH_FAIL_ON_WARNING",
];

struct Layout {
    _temp: TempDir,
    user_dir: PathBuf,
    project: PathBuf,
}

impl Layout {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let user_dir = temp.path().join("user");
        let project = temp.path().join("project");
        fs::create_dir_all(&user_dir).unwrap();
        fs::create_dir_all(project.join("src/nested")).unwrap();
        Self {
            _temp: temp,
            user_dir,
            project,
        }
    }

    fn write(&self, dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn builder(&self, working_dir: &Path) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(working_dir)
            .with_config_dir(&self.user_dir)
    }
}

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_without_any_file() {
    let layout = Layout::new();
    let config = layout
        .builder(&layout.project)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.output_format(), OutputFormat::Plain);
    assert!(!config.fail_on_warning());
    assert_eq!(config.host_platform(), Platform::current());
}

#[test]
fn test_full_precedence_chain_without_env() {
    let layout = Layout::new();
    layout.write(
        &layout.user_dir,
        "config.yaml",
        "platform: unix\noutput: human\nfail_on_warning: true\n",
    );
    layout.write(&layout.project, "cleanpath.yaml", "platform: windows\noutput: json\n");
    layout.write(&layout.project, "cleanpath.local.yaml", "output: dump\n");

    let config = layout
        .builder(&layout.project.join("src/nested"))
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.platform, Some(PlatformChoice::Windows));
    assert_eq!(config.output, Some(OutputFormat::Dump));
    assert_eq!(config.fail_on_warning, Some(true));
}

#[test]
#[serial]
fn test_environment_beats_files() {
    let layout = Layout::new();
    layout.write(&layout.project, "cleanpath.yaml", "platform: windows\n");

    clear_env();
    env::set_var("CLEANPATH_PLATFORM", "unix");
    let result = layout.builder(&layout.project).build();
    clear_env();

    assert_eq!(result.unwrap().host_platform(), Platform::Unix);
}

#[test]
#[serial]
fn test_override_beats_environment() {
    let layout = Layout::new();

    clear_env();
    env::set_var("CLEANPATH_OUTPUT", "json");
    let result = layout
        .builder(&layout.project)
        .with_config(Config {
            output: Some(OutputFormat::Human),
            ..Default::default()
        })
        .build();
    clear_env();

    assert_eq!(result.unwrap().output_format(), OutputFormat::Human);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_an_error() {
    let layout = Layout::new();

    clear_env();
    env::set_var("CLEANPATH_OUTPUT", "xml");
    let result = layout.builder(&layout.project).build();
    clear_env();

    let err = result.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("CLEANPATH_OUTPUT"));
}

#[test]
fn test_unknown_key_is_rejected() {
    let layout = Layout::new();
    layout.write(&layout.project, "cleanpath.yaml", "plaform: unix\n");

    let result = layout.builder(&layout.project).skip_env().build();
    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_load_file_directly() {
    let layout = Layout::new();
    layout.write(&layout.project, "custom.yaml", "platform: auto\n");

    let config = ConfigLoader::load_file(&layout.project.join("custom.yaml")).unwrap();
    assert_eq!(config.platform, Some(PlatformChoice::Auto));
    assert_eq!(config.host_platform(), Platform::current());
}

#[test]
fn test_configured_parser_end_to_end() {
    let layout = Layout::new();
    layout.write(&layout.project, "cleanpath.yaml", "platform: windows\n");

    let config = layout.builder(&layout.project).skip_env().build().unwrap();
    let parser = PathParser::new(config.host_platform());

    assert_eq!(parser.clean("//test/one/two/three.txt"), "\\\\test\\one\\two\\three.txt");
    assert!(!parser.parse("X:\\test/test.html").has_warning());
}
