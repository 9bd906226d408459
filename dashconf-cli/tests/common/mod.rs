//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders with an isolated process environment
//! - Configuration fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A configuration document with a root layer and two profiles.
#[allow(dead_code)]
pub const ONDEMAND_YML: &str = r#"
dashboard_title: "Campus HPC"
disable_dashboard_logo: false
pinned_apps:
  - sys/jupyter
pinned_apps_group_by: category
profiles:
  team1:
    dashboard_title: "Team One"
    dashboard_logo: ~
    navbar_type: light
  team2:
    public_url: "https://cdn.example.org/team2"
"#;

/// Test environment with an isolated home directory.
///
/// Commands built from it start from an empty process environment, so
/// variables on the machine running the tests cannot leak into resolution.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory handed to the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with an empty environment apart from `HOME`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dashconf").expect("Failed to find dashconf binary");
        cmd.env_clear().env("HOME", &self.home);
        cmd
    }

    /// Get a command builder already pointed at a configuration document.
    pub fn command_with_config(&self, config: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("--config").arg(config);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard configuration fixture.
    pub fn ondemand_yml(&self) -> PathBuf {
        self.write_file("ondemand.yml", ONDEMAND_YML)
    }

    /// Write the user settings file at its default location under `HOME`.
    pub fn write_home_settings(&self, contents: &str) -> PathBuf {
        let path = self.home.join(".config/ondemand/settings.yml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create settings dir");
        std::fs::write(&path, contents).expect("Failed to write settings");
        path
    }

    /// Run a command that must succeed and return its stdout.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run dashconf");
        assert!(
            output.status.success(),
            "dashconf failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
