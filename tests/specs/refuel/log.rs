//! Refuel log specs

use crate::prelude::*;

#[test]
fn empty_list_shows_hint() {
    Project::with_vehicle()
        .ft()
        .args(["refuel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No refuels recorded yet"));
}

#[test]
fn add_reports_new_id() {
    Project::with_vehicle()
        .ft()
        .args([
            "refuel", "add", "--date", "2025-01-10", "--liters", "50", "--price", "80",
            "--odometer", "10000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refuel 1 recorded"));
}

#[test]
fn list_is_newest_first() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");
    project.refuel("2025-03-01", "30", "51", "11200");
    project.refuel("2025-02-05", "45", "72", "10600");

    let list = project.json(&["refuel", "list"]);
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        [
            "2025-03-01T00:00:00Z",
            "2025-02-05T00:00:00Z",
            "2025-01-10T00:00:00Z"
        ]
    );
}

#[test]
fn list_text_shows_dates_and_price_per_liter() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    project
        .ft()
        .args(["refuel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10/01/2025"))
        .stdout(predicate::str::contains("1.60"))
        .stdout(predicate::str::contains("80.00€"));
}

#[test]
fn invalid_values_are_rejected() {
    let project = Project::with_vehicle();
    for (liters, price) in [("0", "80"), ("-5", "80"), ("50", "0"), ("50", "-1")] {
        project
            .ft()
            .args([
                "refuel", "add", "--liters", liters, "--price", price, "--odometer", "1000",
            ])
            .assert()
            .failure();
    }
    assert!(project.json(&["refuel", "list"]).as_array().unwrap().is_empty());
}

#[test]
fn malformed_date_is_rejected() {
    Project::with_vehicle()
        .ft()
        .args([
            "refuel", "add", "--date", "10/01/2025", "--liters", "50", "--price", "80",
            "--odometer", "10000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn delete_removes_one_refuel() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");
    project.refuel("2025-01-20", "45", "72", "10600");

    project
        .ft()
        .args(["refuel", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refuel 1 deleted"));

    let list = project.json(&["refuel", "list"]);
    let ids: Vec<u64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [2]);
}

#[test]
fn delete_unknown_id_is_a_no_op() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    project.ft().args(["refuel", "delete", "99"]).assert().success();
    assert_eq!(project.json(&["refuel", "list"]).as_array().unwrap().len(), 1);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");
    project.ft().args(["refuel", "delete", "1"]).assert().success();

    let added = project.json(&[
        "refuel", "add", "--date", "2025-01-20", "--liters", "45", "--price", "72",
        "--odometer", "10600",
    ]);
    assert_eq!(added["id"], 2);
}
