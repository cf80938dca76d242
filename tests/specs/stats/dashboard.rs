//! Statistics and dashboard specs

use crate::prelude::*;

fn two_refuels() -> Project {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");
    project.refuel("2025-01-20", "45", "72", "10600");
    project
}

#[test]
fn stats_over_two_refuels() {
    let stats = two_refuels().json(&["stats"]);
    similar_asserts::assert_eq!(
        stats,
        serde_json::json!({
            "averageConsumption": 95.0 / 600.0 * 100.0,
            "totalLiters": 95.0,
            "totalCost": 152.0,
            "averagePricePerLiter": 1.6,
            "totalDistance": 600,
        })
    );
}

#[test]
fn stats_text_is_rounded() {
    two_refuels()
        .ft()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("15.83 L/100km"))
        .stdout(predicate::str::contains("1.60 €/L"))
        .stdout(predicate::str::contains("95.0 L"))
        .stdout(predicate::str::contains("152.00 €"))
        .stdout(predicate::str::contains("600 km"));
}

#[test]
fn stats_with_no_refuels_are_zero() {
    let stats = Project::with_vehicle().json(&["stats"]);
    assert_eq!(stats["averageConsumption"], 0.0);
    assert_eq!(stats["totalLiters"], 0.0);
    assert_eq!(stats["totalDistance"], 0);
}

#[test]
fn single_refuel_has_no_distance() {
    let project = Project::with_vehicle();
    project.refuel("2025-01-10", "50", "80", "10000");

    let stats = project.json(&["stats"]);
    assert_eq!(stats["totalDistance"], 0);
    assert_eq!(stats["averageConsumption"], 0.0);
    assert_eq!(stats["averagePricePerLiter"], 1.6);
}

#[test]
fn configured_units_label_output() {
    let project = two_refuels();
    project.file("config.toml", "currency = \"$\"\ndistance_unit = \"mi\"\n");

    project
        .ft()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("L/100mi"))
        .stdout(predicate::str::contains("152.00 $"));
}

#[test]
fn dashboard_shows_everything() {
    two_refuels()
        .ft()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renault Clio"))
        .stdout(predicate::str::contains("15.83 L/100km"))
        .stdout(predicate::str::contains("20/01/2025"))
        .stdout(predicate::str::contains("10/01/2025"));
}

#[test]
fn dashboard_json_has_sections() {
    let dashboard = two_refuels().json(&["dashboard"]);
    assert_eq!(dashboard["vehicle"]["model"], "Renault Clio");
    assert_eq!(dashboard["statistics"]["totalDistance"], 600);
    assert_eq!(dashboard["refuels"].as_array().unwrap().len(), 2);
}
