//! Error reporting and argument handling.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_base_dir_is_usage_error() {
    let t = Test::new();

    t.cmd()
        .args(["refresh", "-e", ENV])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--baseDir"));
}

#[test]
fn test_invalid_environment_name() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "-b"])
        .arg(t.dir.path())
        .args(["-e", "../outside", "--owner-name", JOHN.0, "--owner-email", JOHN.1])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid environment name");
    assert!(!t.home.path().join(".openpaas").exists());
}

#[test]
fn test_invalid_owner_email() {
    let t = Test::new();

    let output = t.init_cmd(t.home.path(), JOHN.0, "not-an-email");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid identity");
}

#[test]
fn test_errors_go_to_stderr() {
    let t = Test::new();

    t.cmd()
        .arg("add")
        .args(t.target())
        .args(["-n", "FOO"])
        .write_stdin("foobar")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗"));
}

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("env"))
        .stdout(predicate::str::contains("refresh"));
}
