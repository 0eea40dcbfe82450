//! End-to-end tests for the `csvrow` binary.
//!
//! These run the compiled binary against temporary input files and check
//! the CSV it writes.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PEOPLE: &str = r#"[
    {"Name": "Ann", "Age": 30, "Address": {"City": "Oslo"}, "Note": null},
    {"Name": "Bo", "Age": 25, "Address": {"City": "Rome"}, "Note": "vip"}
]"#;

fn csvrow(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csvrow"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run csvrow")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "csvrow failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn input_file(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("input.json");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn converts_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);

    let out = stdout(&csvrow(&[&input]));
    assert_eq!(out, "Name,Age,City,Note\nAnn,30,Oslo,\nBo,25,Rome,vip\n");
}

#[test]
fn reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_csvrow"))
        .args(["--only", "Name"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(PEOPLE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(stdout(&output), "Name\nAnn\nBo\n");
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);
    let output = dir.path().join("out.csv");

    let result = csvrow(&[&input, "-o", output.to_str().unwrap(), "--no-header"]);
    assert_eq!(stdout(&result), "");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Ann,30,Oslo,\nBo,25,Rome,vip\n"
    );
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn flags_shape_the_table() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);

    let out = stdout(&csvrow(&[
        &input,
        "--exclude",
        "City",
        "--header",
        "Who,Years,Remark",
        "--null-placeholder",
        "n/a",
        "-d",
        ";",
        "--crlf",
    ]));
    assert_eq!(out, "Who;Years;Remark\r\nAnn;30;n/a\r\nBo;25;vip\r\n");
}

#[test]
fn config_file_and_flag_precedence() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);
    let config = dir.path().join("csvrow.yaml");
    fs::write(
        &config,
        "table:\n  whitelist: [Name, Note]\n  nulls:\n    placeholder: \"N/A\"\nwriter:\n  delimiter: \"|\"\n",
    )
    .unwrap();
    let config = config.to_str().unwrap();

    assert_eq!(
        stdout(&csvrow(&[&input, "-c", config])),
        "Name|Note\nAnn|N/A\nBo|vip\n"
    );
    assert_eq!(
        stdout(&csvrow(&[&input, "-c", config, "--only", "Age", "-d", ","])),
        "Age\n30\n25\n"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn header_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);

    let output = csvrow(&[&input, "--header", "X,Y"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("4 values required for header, 2 received"));
    assert!(output.stdout.is_empty());
}

#[test]
fn non_array_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, r#"{"Name": "Ann"}"#);

    let output = csvrow(&[&input]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("array required, object received"));
}

#[test]
fn missing_input_names_the_file() {
    let output = csvrow(&["/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open"));
}

#[test]
fn unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, PEOPLE);
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "table:\n  whitlist: [Name]\n").unwrap();

    let output = csvrow(&[&input, "-c", config.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}
