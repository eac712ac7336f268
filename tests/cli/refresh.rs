//! Tests for `secrets refresh` command.

use crate::support::*;
use std::fs;

#[test]
fn test_refresh_grants_late_joiner() {
    let t = Test::with_secrets(&[("FOO", "foobar"), ("BAR", "bazqux")]);
    let jane = t.join(JANE.0, JANE.1);

    let output = t.refresh();
    assert_success(&output);
    assert_stdout_contains(&output, "refreshed 2 secrets for 2 recipients");

    let exports = t.dir.path().join(".envrc");
    assert_success(&t.env_as(jane.path(), &exports));
    assert_eq!(
        read_exports(&exports),
        ["export BAR=bazqux", "export FOO=foobar"]
    );
}

#[test]
fn test_refresh_revokes_removed_key() {
    let t = Test::init(JOHN.0, JOHN.1);
    let jane = t.join(JANE.0, JANE.1);
    assert_success(&t.add("FOO", "foobar"));

    fs::remove_file(t.pubkeys_dir().join("jane-doe-jane@doe.com.asc")).unwrap();
    let steve = t.join(STEVE.0, STEVE.1);
    assert_success(&t.refresh());

    let exports = t.dir.path().join(".envrc");
    let output = t.env_as(jane.path(), &exports);
    assert_failure(&output);
    assert_stderr_contains(&output, "not authorized");

    assert_success(&t.env_as(steve.path(), &exports));
    assert_eq!(read_exports(&exports), ["export FOO=foobar"]);

    assert_success(&t.env(&exports));
    assert_eq!(read_exports(&exports), ["export FOO=foobar"]);
}

#[test]
fn test_refresh_by_non_recipient_changes_nothing() {
    let t = Test::with_secrets(&[("FOO", "foobar")]);
    let jane = t.join(JANE.0, JANE.1);
    let before = fs::read(t.secret_path("FOO")).unwrap();

    let output = t.refresh_as(jane.path());
    assert_failure(&output);
    assert_stderr_contains(&output, "not authorized");

    assert_eq!(fs::read(t.secret_path("FOO")).unwrap(), before);
}

#[test]
fn test_refresh_without_secrets() {
    let t = Test::init(JOHN.0, JOHN.1);

    let output = t.refresh();
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets to refresh");
}

#[test]
fn test_refresh_leaves_no_staging_directory() {
    let t = Test::with_secrets(&[("FOO", "foobar")]);
    assert_success(&t.refresh());

    let leftovers: Vec<_> = fs::read_dir(t.dir.path().join(ENV))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with('.'))
        .collect();
    assert!(leftovers.is_empty(), "leftover entries: {:?}", leftovers);
}
