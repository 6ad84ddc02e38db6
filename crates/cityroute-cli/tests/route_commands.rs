use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/city")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    cargo_bin_cmd!("cityroute")
}

/// Copy the fixture tables into a fresh directory and point the CLI at it.
fn prepare_command() -> (Command, TempDir) {
    let temp_dir = tempdir().expect("create temp dir");
    for name in ["Locations.csv", "Distances.csv"] {
        fs::copy(fixtures_dir().join(name), temp_dir.path().join(name)).expect("copy fixture");
    }
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env_remove("CITYROUTE_DATA_DIR")
        .arg("--data-dir")
        .arg(temp_dir.path());
    (cmd, temp_dir)
}

#[test]
fn route_prints_best_and_alternative() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "3"]);

    cmd.assert().success().stdout(
        "Source:1\nDestination:3\nBestDrivingRoute:1,2,5,3(11)\nAlternativeDrivingRoute:1,4,3(12)\n",
    );
}

#[test]
fn route_without_alternative() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "3", "--no-alternative"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BestDrivingRoute:1,2,5,3(11)"))
        .stdout(predicate::str::contains(
            "AlternativeDrivingRoute:No Alternative Path Found",
        ));
}

#[test]
fn unknown_source_is_reported_and_fails() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["route", "--from", "42", "--to", "3"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Origin ID is invalid!"))
        .stderr(predicate::str::contains("source id 42"));
}

#[test]
fn restricted_avoids_nodes_and_segments() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "restricted",
        "--from",
        "1",
        "--to",
        "3",
        "--avoid-nodes",
        "5",
        "--avoid-segments",
        "(1,2)",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RestrictedDrivingRoute:1,4,3(12)"));
}

#[test]
fn restricted_include_waypoint() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["restricted", "--from", "3", "--to", "1", "--include", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RestrictedDrivingRoute:3,5,2,1(11)"));
}

#[test]
fn malformed_segments_are_a_usage_error() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["restricted", "--from", "1", "--to", "3", "--avoid-segments", "1-2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("AvoidSegments"));
}

#[test]
fn eco_json_output() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["--format", "json", "eco", "--from", "1", "--to", "3", "--max-walk", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"eco\""))
        .stdout(predicate::str::contains("\"parking\": 2"));
}

#[test]
fn eco_without_qualifying_parking() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["eco", "--from", "1", "--to", "3", "--max-walk", "5"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Message:No possible route with max. walking time of 5 minutes.",
    ));
}

#[test]
fn batch_writes_answer_file() {
    let (mut cmd, temp) = prepare_command();
    let output = temp.path().join("answer.txt");
    cmd.arg("batch")
        .arg(fixtures_dir().join("query_eco.txt"))
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Answer written to"));

    let answer = fs::read_to_string(&output).expect("answer written");
    assert_eq!(
        answer,
        "Source:1\nDestination:3\nDrivingRoute:1,2(5)\nParkingNode:2\nWalkingRoute:2,3(8)\nTotalTime:13\n"
    );
}

#[test]
fn batch_with_invalid_destination_still_writes_answer() {
    let (mut cmd, temp) = prepare_command();
    let input = temp.path().join("query.txt");
    let output = temp.path().join("answer.txt");
    fs::write(&input, "Mode:driving\nSource:1\nDestination:99\n").expect("write query");
    cmd.arg("batch").arg(&input).arg("--output").arg(&output);

    cmd.assert().success();
    let answer = fs::read_to_string(&output).expect("answer written");
    assert_eq!(answer, "Source:1\nDestination:99\nDestiny ID is invalid!\n");
}

#[test]
fn missing_dataset_is_a_friendly_error() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp.path())
        .args(["route", "--from", "1", "--to", "3"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the city dataset"));
}
