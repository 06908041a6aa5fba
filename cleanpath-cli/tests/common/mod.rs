//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a temporary working directory with its own user
//! configuration directory, and with the `CLEANPATH_*` variables removed so
//! the developer's environment cannot leak into assertions.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ISOLATED_VARS: [&str; 6] = [
    "CLEANPATH_PLATFORM",
    "CLEANPATH_OUTPUT",
    "CLEANPATH_FAIL_ON_WARNING",
    "CLEANPATH_CONFIG_DIR",
    "CLEANPATH_LOG_MODE",
    "HOME",
];

/// Isolated environment for running the `cleanpath` binary.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands.
    pub work_dir: PathBuf,
    /// User configuration directory passed via `--config-dir`.
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("user-config");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Command with a scrubbed environment and no pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cleanpath").expect("Failed to find cleanpath binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Command with `--config-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Command pinned to a host platform.
    pub fn command_on(&self, platform: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--platform").arg(platform);
        cmd
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a file into the working directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }
}

/// Run a command and return its stdout, asserting success.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run cleanpath");
    assert!(
        output.status.success(),
        "cleanpath failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}
