//! Test support utilities for integration tests.
//!
//! Provides isolated base and home directories plus helper commands.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `dir` is the secrets base directory shared by every user of the test;
/// each user gets their own home directory. No process-global state is
/// mutated, so tests can safely run in parallel.
pub struct Test {
    /// Base directory (`-b`) for secrets
    pub dir: TempDir,
    /// Home directory of the default user
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment where the default user ran `init`.
    pub fn init(name: &str, email: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(t.home.path(), name, email);
        assert!(
            output.status.success(),
            "Failed to initialize environment: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized test environment with secrets added.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(JOHN.0, JOHN.1);
        for (k, v) in secrets {
            let output = t.add(k, v);
            assert!(
                output.status.success(),
                "Failed to add secret {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Create a home directory for another user and run `init` as them.
    pub fn join(&self, name: &str, email: &str) -> TempDir {
        let home = TempDir::new().expect("failed to create temp home");
        let output = self.init_cmd(home.path(), name, email);
        assert!(
            output.status.success(),
            "Failed to initialize {}: {}",
            name,
            String::from_utf8_lossy(&output.stderr)
        );
        home
    }

    /// Path of a secret's ciphertext in the test environment.
    pub fn secret_path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(ENV).join("secrets").join(name)
    }

    /// Directory of registered public keys in the test environment.
    pub fn pubkeys_dir(&self) -> std::path::PathBuf {
        self.dir.path().join(ENV).join("pubkeys")
    }
}
