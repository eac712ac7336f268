//! Tests for `secrets add` command.

use crate::support::*;
use std::fs;

#[test]
fn test_add_encrypts_value() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t.add("FOO", "foobar");
    assert_success(&output);
    assert_stdout_contains(&output, "added FOO for 1 recipient");

    let ciphertext = fs::read_to_string(t.secret_path("FOO")).unwrap();
    assert!(ciphertext.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!ciphertext.contains("foobar"));
}

#[test]
fn test_add_replaces_existing() {
    let t = Test::with_secrets(&[("FOO", "one")]);

    let output = t.add("FOO", "two");
    assert_success(&output);
    assert_stdout_contains(&output, "replaced FOO");

    let exports = t.dir.path().join("exports");
    assert_success(&t.env(&exports));
    assert_eq!(read_exports(&exports), ["export FOO=two"]);
}

#[test]
fn test_add_strips_trailing_newline_from_stdin() {
    let t = Test::init(JOHN.0, JOHN.1);
    assert_success(&t.add("FOO", "foobar\n"));

    let exports = t.dir.path().join("exports");
    assert_success(&t.env(&exports));
    assert_eq!(read_exports(&exports), ["export FOO=foobar"]);
}

#[test]
fn test_add_counts_all_recipients() {
    let t = Test::init(JOHN.0, JOHN.1);
    let _jane = t.join(JANE.0, JANE.1);

    let output = t.add("FOO", "foobar");
    assert_success(&output);
    assert_stdout_contains(&output, "for 2 recipients");
}

#[test]
fn test_add_without_init_fails() {
    let t = Test::new();

    let output = t.add("FOO", "foobar");
    assert_failure(&output);
    assert_stderr_contains(&output, "no public keys registered");
    assert_stderr_contains(&output, "secrets init");
    assert!(!t.secret_path("FOO").exists());
}

#[test]
fn test_add_empty_value_fails() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t.add("FOO", "");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
    assert!(!t.secret_path("FOO").exists());
}

#[test]
fn test_add_rejects_path_like_name() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t.add("../FOO", "foobar");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret name");
}
