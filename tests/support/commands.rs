//! Command helper methods for Test.

use super::{Test, ENV, PASSPHRASE};
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a `secrets` command for the default user.
    pub fn cmd(&self) -> Command {
        self.cmd_as(self.home.path())
    }

    /// Create a `secrets` command running with `home` as home directory.
    ///
    /// Returns a Command configured with:
    /// - HOME set to `home`
    /// - the test passphrase and a cheap scrypt work factor
    /// - inherited key or log overrides removed
    pub fn cmd_as(&self, home: &Path) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secrets").expect("failed to find secrets binary");
        cmd.env("HOME", home);
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", home);
        cmd.env("OPENPAAS_PASSPHRASE", PASSPHRASE);
        cmd.env("OPENPAAS_SCRYPT_WORK_FACTOR", "2");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("OPENPAAS_PRIVATE_KEY");
        cmd.env_remove("OPENPAAS_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `-b <dir> -e <env>` arguments for the test environment.
    pub fn target(&self) -> Vec<String> {
        vec![
            "-b".to_string(),
            self.dir.path().display().to_string(),
            "-e".to_string(),
            ENV.to_string(),
        ]
    }

    /// Shortcut for a non-interactive `secrets init`.
    pub fn init_cmd(&self, home: &Path, name: &str, email: &str) -> Output {
        self.cmd_as(home)
            .arg("init")
            .args(self.target())
            .args(["--owner-name", name, "--owner-email", email])
            .output()
            .expect("failed to run secrets init")
    }

    /// Shortcut for `secrets add`, value on stdin.
    pub fn add(&self, name: &str, value: &str) -> Output {
        self.cmd()
            .arg("add")
            .args(self.target())
            .args(["-n", name])
            .write_stdin(value)
            .output()
            .expect("failed to run secrets add")
    }

    /// Shortcut for `secrets env` for the user living in `home`.
    pub fn env_as(&self, home: &Path, output: &Path) -> Output {
        self.cmd_as(home)
            .arg("env")
            .args(self.target())
            .arg("-o")
            .arg(output)
            .output()
            .expect("failed to run secrets env")
    }

    /// Shortcut for `secrets env` for the default user.
    pub fn env(&self, output: &Path) -> Output {
        self.env_as(self.home.path(), output)
    }

    /// Shortcut for `secrets refresh` for the user living in `home`.
    pub fn refresh_as(&self, home: &Path) -> Output {
        self.cmd_as(home)
            .arg("refresh")
            .args(self.target())
            .output()
            .expect("failed to run secrets refresh")
    }

    /// Shortcut for `secrets refresh` for the default user.
    pub fn refresh(&self) -> Output {
        self.refresh_as(self.home.path())
    }
}
