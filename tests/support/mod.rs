//! Shared test harness for CLI tests.

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated cabinet environment: fresh HOME (key + data live under
/// `~/.cabinet`) and a fresh working directory for `.cabinet.toml`.
pub struct Test {
    pub home: TempDir,
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp home"),
            dir: TempDir::new().expect("failed to create temp project dir"),
        }
    }

    /// Create a cabinet command with correct environment variables.
    ///
    /// HOME points at the temporary home so key material and data never
    /// leak between tests; the ambient CABINET_* variables are cleared.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cabinet").expect("failed to find cabinet binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env("CABINET_PROJECT", "billing");
        cmd.env("CABINET_SERVICE", "api");
        cmd.env_remove("CABINET_KEY");
        cmd.env_remove("CABINET_DATA_DIR");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `cabinet init`.
    pub fn init(&self) {
        self.cmd().arg("init").assert().success();
    }

    /// Shortcut for `cabinet secret create`.
    pub fn create_secret(&self, name: &str) {
        self.cmd()
            .args(["secret", "create", name])
            .assert()
            .success();
    }

    /// Shortcut for `cabinet add`.
    pub fn add(&self, secret: &str, version: &str, value: &str) {
        self.cmd()
            .args(["add", secret, version, value])
            .assert()
            .success();
    }
}
