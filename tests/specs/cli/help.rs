//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .ft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle"))
        .stdout(predicate::str::contains("refuel"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn refuel_help_lists_flags() {
    Project::empty()
        .ft()
        .args(["refuel", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--liters"))
        .stdout(predicate::str::contains("--odometer"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn version_flag_succeeds() {
    Project::empty().ft().arg("--version").assert().success();
}
