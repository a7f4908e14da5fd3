use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const TOWN: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

const TOWN_OUTPUT: &str = "\
Output #1: 9
Output #2: 5
Output #3: 13
Output #4: 22
Output #5: NO SUCH ROUTE
Output #6: 2
Output #7: 3
Output #8: 9
Output #9: 9
Output #10: 7
";

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("route-server");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn inline_edge_list() {
    cli().arg(TOWN).assert().success().stdout(TOWN_OUTPUT);
}

#[test]
fn edge_list_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("town.txt");
    fs::write(&path, format!("{TOWN}\n")).expect("write edge list");

    cli().arg(&path).assert().success().stdout(TOWN_OUTPUT);
}

#[test]
fn invalid_edge_list_fails() {
    cli()
        .arg("AB5, BC, CD8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("edge list is invalid"));
}

#[test]
fn duplicate_edge_fails() {
    cli()
        .arg("AB5, AB6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("edge A -> B already exists"));
}

#[test]
fn missing_input_is_usage_error() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT is required"));
}
