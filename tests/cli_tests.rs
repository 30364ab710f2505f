use std::fs;
use std::process::Command;

use serde_json::Value;

#[test]
fn json_summary_reports_agreement() {
    let exe = env!("CARGO_BIN_EXE_genematch");
    let output = Command::new(exe)
        .args(["--length", "300", "--min-length", "4", "--seed", "42", "--json"])
        .output()
        .expect("failed to run genematch");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sequence1_length"].as_u64().unwrap(), 300);
    assert_eq!(json["min_length"].as_u64().unwrap(), 4);
    assert!(json["outputs_agree"].as_bool().unwrap());
    assert_eq!(json["baseline"]["name"].as_str().unwrap(), "CPU");
    assert_eq!(
        json["baseline"]["matches"].as_u64(),
        json["accelerated"]["matches"].as_u64()
    );
}

#[test]
fn text_output_lists_matches_and_timings() {
    let exe = env!("CARGO_BIN_EXE_genematch");
    let output = Command::new(exe)
        .args(["--length", "200", "--min-length", "3", "--seed", "1", "--show", "--threads", "2"])
        .output()
        .expect("failed to run genematch");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("g1: "));
    assert!(text.contains("Total sequences found: "));
    assert!(text.contains("CPU time: "));
    assert!(text.contains(" speedup: "));
}

#[test]
fn csv_export_matches_json_count() {
    let exe = env!("CARGO_BIN_EXE_genematch");
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("matches.csv");

    let output = Command::new(exe)
        .args([
            "--length",
            "250",
            "--min-length",
            "4",
            "--seed",
            "5",
            "--inclusive-bounds",
            "--json",
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run genematch");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("start1,start2,length"));
    assert_eq!(
        lines.count() as u64,
        json["baseline"]["matches"].as_u64().unwrap()
    );
}

#[test]
fn zero_min_length_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_genematch");
    let output = Command::new(exe)
        .args(["--length", "50", "--min-length", "0"])
        .output()
        .expect("failed to run genematch");
    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("min_length must be at least 1"));
}

#[test]
fn unwritable_csv_path_fails() {
    let exe = env!("CARGO_BIN_EXE_genematch");
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("missing").join("matches.csv");
    let output = Command::new(exe)
        .args(["--length", "50", "--seed", "3", "--csv", csv_path.to_str().unwrap()])
        .output()
        .expect("failed to run genematch");
    assert!(!output.status.success());
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("creating csv"));
}
