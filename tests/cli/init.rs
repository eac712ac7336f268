//! Tests for `secrets init` command.

use crate::support::*;
use std::fs;

fn private_key_path(t: &Test) -> std::path::PathBuf {
    t.home.path().join(".openpaas").join("private-key.asc")
}

#[test]
fn test_init_creates_key_and_registers_it() {
    let t = Test::new();

    let output = t.init_cmd(t.home.path(), JOHN.0, JOHN.1);
    assert_success(&output);
    assert_stdout_contains(&output, "private key created");
    assert_stdout_contains(&output, "registered John Doe <john@doe.com>");
    assert_stdout_contains(&output, "cannot be recovered");

    assert!(private_key_path(&t).is_file());
    let pubkey = t.pubkeys_dir().join("john-doe-john@doe.com.asc");
    let record = fs::read_to_string(&pubkey).unwrap();
    assert!(record.contains("john@doe.com"));
    assert!(record.contains("age1"));
    assert!(!record.contains("AGE-SECRET-KEY"));
    assert!(t.dir.path().join(ENV).join("secrets").is_dir());
}

#[cfg(unix)]
#[test]
fn test_init_private_key_is_owner_only() {
    let t = Test::init(JOHN.0, JOHN.1);

    assert_mode(&private_key_path(&t), 0o600);
    assert_mode(private_key_path(&t).parent().unwrap(), 0o700);
}

#[test]
fn test_init_twice_keeps_key() {
    let t = Test::init(JOHN.0, JOHN.1);
    let before = fs::read_to_string(private_key_path(&t)).unwrap();

    let output = t.init_cmd(t.home.path(), JOHN.0, JOHN.1);
    assert_success(&output);
    assert!(!stdout(&output).contains("private key created"));
    assert_stdout_contains(&output, "registered John Doe <john@doe.com>");

    assert_eq!(fs::read_to_string(private_key_path(&t)).unwrap(), before);
}

#[test]
fn test_init_existing_key_in_second_environment() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t
        .cmd()
        .args(["init", "-b"])
        .arg(t.dir.path())
        .args(["-e", "prod"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t
        .dir
        .path()
        .join("prod/pubkeys/john-doe-john@doe.com.asc")
        .is_file());
}

#[test]
fn test_init_with_wrong_passphrase_fails() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t
        .cmd()
        .env("OPENPAAS_PASSPHRASE", "wrong")
        .arg("init")
        .args(t.target())
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not be unlocked");
}

#[test]
fn test_init_without_terminal_or_owner_fails() {
    let t = Test::new();

    let output = t.cmd().arg("init").args(t.target()).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no private key found");
    assert!(!private_key_path(&t).exists());
}

#[test]
fn test_init_with_inline_private_key() {
    let t = Test::new();
    let jane = key_pair(JANE);

    let output = t
        .cmd()
        .env("OPENPAAS_PRIVATE_KEY", jane.armored())
        .arg("init")
        .args(t.target())
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!stdout(&output).contains("private key created"));

    assert!(!private_key_path(&t).exists());
    assert!(t.pubkeys_dir().join("jane-doe-jane@doe.com.asc").is_file());
}
