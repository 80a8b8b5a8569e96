//! Isolated environment for running the binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const BCE_VARS: &[&str] = &[
    "BCE_ACCESS_KEY",
    "BCE_SECRET_KEY",
    "BCE_CERT_ENDPOINT",
    "BCE_CDN_ENDPOINT",
    "BCE_CERT_CLEANER_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp home whose config directory is empty unless a test writes one
pub struct TestEnv {
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_bce-cert-cleaner")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Write a file under the temp home and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", config_home(self.home.path()))
            .env("NO_COLOR", "1");
        for var in BCE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

fn config_home(home: &Path) -> PathBuf {
    home.join(".config")
}
