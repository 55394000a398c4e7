#![allow(deprecated)] // assert_cmd 2.x deprecates cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("mfleet")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sweep")
                .and(predicate::str::contains("regions"))
                .and(predicate::str::contains("endpoints")),
        );
}

#[test]
fn help_shows_policy_flags_with_defaults() {
    Command::cargo_bin("mfleet")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--settle-delay")
                .and(predicate::str::contains("--operation-timeout"))
                .and(predicate::str::contains("--probe-timeout")),
        );
}

#[test]
fn endpoints_requires_region() {
    Command::cargo_bin("mfleet")
        .unwrap()
        .arg("endpoints")
        .assert()
        .failure()
        .stderr(predicate::str::contains("REGION"));
}

#[test]
fn rejects_unknown_subcommand() {
    Command::cargo_bin("mfleet")
        .unwrap()
        .arg("obliterate")
        .assert()
        .failure();
}
