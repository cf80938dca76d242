//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    Project::empty()
        .ft()
        .arg("refill")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn refuel_without_vehicle_suggests_setup() {
    Project::empty()
        .ft()
        .args(["refuel", "add", "--liters", "40", "--price", "60", "--odometer", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vehicle configured"))
        .stderr(predicate::str::contains("ft vehicle set"));
}

#[test]
fn dashboard_without_vehicle_fails() {
    Project::empty()
        .ft()
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vehicle configured"));
}

#[test]
fn invalid_config_is_reported() {
    let project = Project::empty();
    project.file("config.toml", "currency = 12\n");

    project
        .ft()
        .args(["vehicle", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
