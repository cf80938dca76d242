//! Vehicle profile specs

use crate::prelude::*;

#[test]
fn show_without_vehicle_explains_setup() {
    Project::empty()
        .ft()
        .args(["vehicle", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicle configured"));
}

#[test]
fn set_then_show() {
    let project = Project::empty();
    project
        .ft()
        .args(["vehicle", "set", "--model", "Peugeot 308", "--capacity", "52.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle saved: Peugeot 308 (52.5 L)"));

    project
        .ft()
        .args(["vehicle", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Peugeot 308"))
        .stdout(predicate::str::contains("Tank: 52.5 L"));
}

#[test]
fn set_replaces_existing_profile() {
    let project = Project::with_vehicle();
    let first = project.json(&["vehicle", "show"]);

    project
        .ft()
        .args(["vehicle", "set", "--model", "Fiat Panda", "--capacity", "35"])
        .assert()
        .success();

    let second = project.json(&["vehicle", "show"]);
    assert_eq!(second["model"], "Fiat Panda");
    assert_eq!(second["capacity"], 35.0);
    assert_eq!(second["id"], first["id"]);
}

#[test]
fn blank_model_is_rejected() {
    Project::empty()
        .ft()
        .args(["vehicle", "set", "--model", "   ", "--capacity", "50"])
        .assert()
        .failure();
}

#[test]
fn non_positive_capacity_is_rejected() {
    Project::empty()
        .ft()
        .args(["vehicle", "set", "--model", "Clio", "--capacity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));
}

#[test]
fn show_json_is_null_without_vehicle() {
    let project = Project::empty();
    assert!(project.json(&["vehicle", "show"]).is_null());
}
