// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

fn write_snapshot(home: &TempDir) {
    let snapshot = serde_json::json!({
        "items": [{"id": 101, "name": "Widget"}, {"id": 7, "name": "Gasket"}],
        "locations": [{"location": "A1", "items": [101, 7]}],
        "fetched_at": "2026-03-01T08:30:00Z"
    });
    std::fs::write(
        home.path().join("catalog.json"),
        serde_json::to_string_pretty(&snapshot).unwrap(),
    )
    .unwrap();
}

#[test]
fn catalog_offline_without_snapshot_fails() {
    let home = TempDir::new().unwrap();

    wms_in(&home)
        .args(["catalog", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog available"));
}

#[test]
fn catalog_offline_shows_snapshot() {
    let home = TempDir::new().unwrap();
    write_snapshot(&home);

    wms_in(&home)
        .args(["catalog", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog (cached, fetched 2026-03-01 08:30:00 UTC)"))
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("A1: Widget (101), Gasket (7)"));
}

#[test]
fn catalog_falls_back_to_snapshot_when_unreachable() {
    let home = TempDir::new().unwrap();
    write_offline_config(&home, None);
    write_snapshot(&home);

    let output = wms_in(&home)
        .args(["catalog", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "cached");
    assert_eq!(json["catalog"]["items"][0]["name"], "Widget");
}

#[test]
fn catalog_requires_remote_unless_offline() {
    let home = TempDir::new().unwrap();

    wms_in(&home)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no remote configured"));
}

#[test]
fn catalog_offline_location_lists_stocked_items() {
    let home = TempDir::new().unwrap();
    write_snapshot(&home);

    wms_in(&home)
        .args(["catalog", "--offline", "-l", "A1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A1 (cached):"))
        .stdout(predicate::str::contains("101  Widget"))
        .stdout(predicate::str::contains("7  Gasket"));
}

#[test]
fn catalog_offline_unknown_location_fails() {
    let home = TempDir::new().unwrap();
    write_snapshot(&home);

    wms_in(&home)
        .args(["catalog", "--offline", "-l", "Z9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location 'Z9'"));
}
