#![allow(clippy::unwrap_used, clippy::print_stdout, clippy::print_stderr)] // okay in tests

use assert_cmd::cargo::CommandCargoExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("services crate lives in the workspace")
        .to_path_buf()
}

fn run_cli(args: &[&str]) -> Output {
    Command::cargo_bin("geoaxis-cli")
        .unwrap()
        .args(args)
        .current_dir(workspace_dir())
        .env("GEOAXIS__OUTPUT__PRETTY", "false")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap()
}

fn json_output(args: &[&str]) -> Value {
    let output = run_cli(args);

    assert!(output.status.success(), "failed to run CLI: {output:?}");

    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn it_sorts_directions() {
    let result = json_output(&["sort", "-d", "up", "north", "east"]);

    assert_eq!(result["changed"], json!(true));
    assert_eq!(result["sourceIndices"], json!([1, 2, 0]));
    assert_eq!(
        result["axes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|axis| axis["direction"].as_str().unwrap())
            .collect::<Vec<_>>(),
        ["north", "east", "up"]
    );
}

#[test]
fn it_keeps_canonical_directions() {
    let result = json_output(&["sort", "--direction", "north", "--direction", "east"]);

    assert_eq!(result["changed"], json!(false));
    assert_eq!(result["sourceIndices"], json!([0, 1]));
}

#[test]
fn it_sorts_meridian_directions() {
    let result = json_output(&["sort", "-d", "South along 90°E", "South along 0°E"]);

    assert_eq!(result["axes"][0]["direction"], json!("South along 0°"));
    assert_eq!(result["axes"][1]["direction"], json!("South along 90°E"));
}

#[test]
fn it_sorts_axes_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({
            "name": "Cartesian 2D",
            "axes": [
                { "name": "Easting", "abbreviation": "E", "direction": "east", "unit": "metre" },
                { "name": "Northing", "abbreviation": "N", "direction": "north", "unit": "metre" },
            ],
        })
    )
    .unwrap();

    let result = json_output(&["sort", "--input", file.path().to_str().unwrap()]);

    assert_eq!(result["axes"][0]["abbreviation"], json!("N"));
    assert_eq!(result["axes"][0]["unit"], json!("metre"));
    assert_eq!(result["axes"][1]["abbreviation"], json!("E"));
    assert_eq!(result["changed"], json!(true));
}

#[test]
fn it_compares_directions() {
    let result = json_output(&["compare", "north", "east"]);

    assert_eq!(
        result,
        json!({
            "first": "north",
            "second": "east",
            "ordering": "less",
            "compassAngle": 4,
        })
    );
}

#[test]
fn it_fails_for_inconsistent_orderings() {
    let output = run_cli(&["sort", "-d", "north", "east", "south", "west"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Inconsistent axis ordering"), "{stderr}");
}

#[test]
fn it_requires_axes() {
    let output = run_cli(&["sort"]);

    assert!(!output.status.success());
}
