use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "teams": [
        {"id": 1, "name": "Payments", "keyPrefix": "PAY"},
        {"id": 2, "name": "Enterprise Solution", "keyPrefix": "ENT"}
    ],
    "projects": [
        {"id": 10, "name": "Card Gateway", "teamId": 1, "plannedPoints": 20.0, "completedPoints": 5.0}
    ],
    "tickets": {"items": [
        {"id": 100, "title": "Fix timeout", "jiraKey": "PAY-1", "projectId": 10,
         "status": "In Progress", "priority": "High", "deliveryPoints": 3.0,
         "createdAt": "2026-01-10T09:00:00Z"},
        {"id": 101, "title": "Pen test findings", "jiraKey": "ENT-2",
         "status": "Security Testing", "priority": 2},
        {"id": 102, "title": "Old cleanup", "jira_key": "PAY-3", "project_id": 10,
         "status": 11, "delivery_points": 2.0}
    ]},
    "movements": [
        {"ticketKey": "PAY-1", "fromLevel": "L1", "toLevel": "L3"},
        {"ticketKey": "PAY-3", "fromLevel": "L3", "toLevel": "L1"}
    ]
}"#;

fn write_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

fn stagehand() -> Command {
    Command::cargo_bin("stagehand").unwrap()
}

#[test]
fn test_workload_table() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir);
    stagehand()
        .arg(&path)
        .arg("workload")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payments"))
        .stdout(predicate::str::contains("Enterprise Solution"))
        .stdout(predicate::str::contains("Data window: 2026-01-10"));
}

#[test]
fn test_execution_board_has_panels() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir);
    stagehand()
        .arg(&path)
        .args(["board", "--team", "Payments", "--view", "execution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog"))
        .stdout(predicate::str::contains("Completed"))
        .stdout(predicate::str::contains("Rollbacks"))
        .stdout(predicate::str::contains("Fix timeout"));
}

#[test]
fn test_sprint_board_uses_raw_status() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir);
    stagehand()
        .arg(&path)
        .args(["board", "--team", "Payments", "--view", "sprint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress"));
}

#[test]
fn test_histogram() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir);
    stagehand()
        .arg(&path)
        .arg("histogram")
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Testing"))
        .stdout(predicate::str::contains("Live/Done"));
}

#[test]
fn test_escalations_exclude_de_escalations() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir);
    stagehand()
        .arg(&path)
        .arg("escalations")
        .assert()
        .success()
        .stdout(predicate::str::contains("PAY-1"))
        .stdout(predicate::str::contains("de-escalation"))
        .stdout(predicate::str::contains("PAY-3").not());
}

#[test]
fn test_missing_snapshot_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    stagehand()
        .arg(dir.path().join("nope.json"))
        .arg("workload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read snapshot"));
}

#[test]
fn test_malformed_snapshot_mentions_connectivity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{\"tickets\": [{\"title\": \"no id\"}]}").unwrap();
    stagehand()
        .arg(&path)
        .arg("workload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("check backend connectivity"));
}
