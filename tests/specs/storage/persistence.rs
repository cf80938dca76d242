//! Persistence specs: data survives between runs, reset, compaction

use crate::prelude::*;

#[test]
fn data_survives_between_invocations() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    assert!(project.path().join("wal.jsonl").is_file());
    assert_eq!(project.json(&["vehicle", "show"])["model"], "Renault Clio");
    assert_eq!(project.json(&["refuel", "list"]).as_array().unwrap().len(), 1);
}

#[test]
fn reset_requires_confirmation() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    project
        .ft()
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    assert_eq!(project.json(&["refuel", "list"]).as_array().unwrap().len(), 1);
}

#[test]
fn reset_clears_vehicle_and_refuels() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    project
        .ft()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    assert!(project.json(&["vehicle", "show"]).is_null());
    assert!(project.json(&["refuel", "list"]).as_array().unwrap().is_empty());
}

#[test]
fn compact_keeps_live_records() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");
    project.refuel("2025-01-20", "45", "72", "10600");
    project.ft().args(["refuel", "delete", "1"]).assert().success();

    let result = project.json(&["compact"]);
    assert!(result["entries_after"].as_u64().unwrap() < result["entries_before"].as_u64().unwrap());

    let list = project.json(&["refuel", "list"]);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], 2);
    assert_eq!(project.json(&["vehicle", "show"])["model"], "Renault Clio");
}

#[test]
fn torn_trailing_line_is_dropped() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    let mut wal = project.read("wal.jsonl");
    wal.push_str("{\"sequence\":9,\"timest");
    project.file("wal.jsonl", &wal);

    assert_eq!(project.json(&["refuel", "list"]).as_array().unwrap().len(), 1);
    project.refuel("2025-01-20", "45", "72", "10600");
    assert_eq!(project.json(&["refuel", "list"]).as_array().unwrap().len(), 2);
}

#[test]
fn log_filter_comes_from_environment() {
    let project = Project::with_vehicle();
    project
        .ft()
        .env("FT_LOG", "debug")
        .args(["refuel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No refuels recorded yet"));
}
