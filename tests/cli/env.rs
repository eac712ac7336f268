//! Tests for `secrets env` command.

use crate::support::*;

#[test]
fn test_env_writes_sorted_exports() {
    let t = Test::with_secrets(&[("FOO", "foobar"), ("BAR", "bazqux")]);
    let exports = t.dir.path().join(".envrc");

    let output = t.env(&exports);
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 2 secrets");

    assert_eq!(
        read_exports(&exports),
        ["export BAR=bazqux", "export FOO=foobar"]
    );
}

#[test]
fn test_env_quotes_unsafe_values() {
    let t = Test::with_secrets(&[("GREETING", "hello world")]);
    let exports = t.dir.path().join(".envrc");

    assert_success(&t.env(&exports));
    assert_eq!(read_exports(&exports), ["export GREETING='hello world'"]);
}

#[test]
fn test_env_standard_secrets() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let exports = t.dir.path().join(".envrc");

    assert_success(&t.env(&exports));

    let lines = read_exports(&exports);
    assert_eq!(lines.len(), STANDARD_SECRETS.len());
    assert_eq!(lines[0], "export API_KEY=sk-test-12345");
    for (name, value) in STANDARD_SECRETS {
        assert!(lines.contains(&format!("export {}={}", name, value)));
    }
}

#[cfg(unix)]
#[test]
fn test_env_output_is_owner_only() {
    let t = Test::with_secrets(&[("FOO", "foobar")]);
    let exports = t.dir.path().join(".envrc");

    assert_success(&t.env(&exports));
    assert_mode(&exports, 0o600);
}

#[test]
fn test_env_without_secrets_writes_empty_file() {
    let t = Test::init(JOHN.0, JOHN.1);
    let exports = t.dir.path().join(".envrc");

    let output = t.env(&exports);
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 0 secrets");
    assert!(read_exports(&exports).is_empty());
}

#[test]
fn test_env_for_every_recipient() {
    let t = Test::init(JOHN.0, JOHN.1);
    let jane = t.join(JANE.0, JANE.1);
    assert_success(&t.add("FOO", "foobar"));

    let john_exports = t.dir.path().join("john.env");
    let jane_exports = t.dir.path().join("jane.env");
    assert_success(&t.env(&john_exports));
    assert_success(&t.env_as(jane.path(), &jane_exports));

    assert_eq!(read_exports(&john_exports), read_exports(&jane_exports));
}

#[test]
fn test_env_without_private_key_fails() {
    let t = Test::with_secrets(&[("FOO", "foobar")]);
    let stranger = tempfile::TempDir::new().unwrap();
    let exports = t.dir.path().join(".envrc");

    let output = t.env_as(stranger.path(), &exports);
    assert_failure(&output);
    assert_stderr_contains(&output, "no private key found");
    assert_stderr_contains(&output, "secrets init -b <baseDir> -e dev");
    assert!(!exports.exists());
}

#[test]
fn test_env_for_late_joiner_fails_until_refresh() {
    let t = Test::with_secrets(&[("FOO", "foobar")]);
    let jane = t.join(JANE.0, JANE.1);
    let exports = t.dir.path().join(".envrc");

    let output = t.env_as(jane.path(), &exports);
    assert_failure(&output);
    assert_stderr_contains(&output, "not authorized to decrypt 'FOO'");
    assert_stderr_contains(&output, "secrets refresh");
}
