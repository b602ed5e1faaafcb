//! End-to-end tests for the `qmeas` binary.
//!
//! Each test writes observable IR files into a temporary directory and
//! checks the exit status and output of one subcommand.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

fn qmeas(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qmeas"))
        .args(args)
        .env_remove("QMEAS_CONFIG")
        .env_remove("QMEAS_RTOL")
        .env_remove("QMEAS_ATOL")
        .output()
        .expect("failed to run qmeas")
}

fn write_ir(dir: &Path, name: &str, ir: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, ir.to_string()).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn test_inspect_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_ir(dir.path(), "zix.json", &json!(["z", "i", "x"]));

    let output = qmeas(&["inspect", path.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["label"], "Z@I@X");
    assert_eq!(report["qubit_count"], 3);
    assert_eq!(report["ir"], json!(["z", "i", "x"]));
    assert_eq!(report["ascii_symbols"], json!(["Z@I@X", "Z@I@X", "Z@I@X"]));
    assert_eq!(report["basis_rotation_gates"], json!(["h"]));
    assert_eq!(report["eigenvalues"].as_array().unwrap().len(), 8);
}

#[test]
fn test_inspect_table_report() {
    let dir = TempDir::new().unwrap();
    let path = write_ir(dir.path(), "y.json", &json!(["y"]));

    let output = qmeas(&["inspect", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Qubits:      1"));
    assert!(text.contains("[z, s, h]"));
}

#[test]
fn test_inspect_format_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_ir(dir.path(), "x.json", &json!(["x"]));
    let config = dir.path().join("qmeas.yaml");
    fs::write(&config, "format: json\n").unwrap();

    let output = qmeas(&[
        "inspect",
        path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["label"], "X");
}

#[test]
fn test_inspect_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = write_ir(dir.path(), "x.json", &json!(["x"]));

    let output = qmeas(&["inspect", path.to_str().unwrap(), "--format", "xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown format"));
}

#[test]
fn test_inspect_rejects_non_hermitian() {
    let dir = TempDir::new().unwrap();
    let path = write_ir(
        dir.path(),
        "bad.json",
        &json!([[[[0.0, 0.0], [1.0, 0.0]], [[0.0, 0.0], [0.0, 0.0]]]]),
    );

    let output = qmeas(&["inspect", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid observable"));
}

#[test]
fn test_inspect_missing_file() {
    let output = qmeas(&["inspect", "/nonexistent/obs.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("File not found"));
}

// ============================================================================
// compose
// ============================================================================

#[test]
fn test_compose_to_stdout() {
    let dir = TempDir::new().unwrap();
    let a = write_ir(dir.path(), "zix.json", &json!(["z", "i", "x"]));
    let b = write_ir(dir.path(), "y.json", &json!(["y"]));

    let output = qmeas(&["compose", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let ir: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(ir, json!(["z", "i", "x", "y"]));
}

#[test]
fn test_compose_to_file() {
    let dir = TempDir::new().unwrap();
    let a = write_ir(dir.path(), "x.json", &json!(["x"]));
    let b = write_ir(
        dir.path(),
        "herm.json",
        &json!([[[[1.0, 0.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 0.0]]]]),
    );
    let out = dir.path().join("out.json");

    let output = qmeas(&[
        "compose",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let ir: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        ir,
        json!(["x", [[[1.0, 0.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 0.0]]]])
    );
}

#[test]
fn test_compose_requires_input() {
    let output = qmeas(&["compose"]);
    assert!(!output.status.success());
}

// ============================================================================
// equiv
// ============================================================================

#[test]
fn test_equiv_standard_and_hermitian() {
    let dir = TempDir::new().unwrap();
    let x = write_ir(dir.path(), "x.json", &json!(["x"]));
    let herm = write_ir(
        dir.path(),
        "herm_x.json",
        &json!([[[[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [0.0, 0.0]]]]),
    );

    let output = qmeas(&["equiv", x.to_str().unwrap(), herm.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("equivalent"));
    assert!(!text.contains("not equivalent"));
}

#[test]
fn test_equiv_different_observables() {
    let dir = TempDir::new().unwrap();
    let x = write_ir(dir.path(), "x.json", &json!(["x"]));
    let z = write_ir(dir.path(), "z.json", &json!(["z"]));

    let output = qmeas(&["equiv", x.to_str().unwrap(), z.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("not equivalent"));
}

#[test]
fn test_equiv_loose_tolerance_flag() {
    let dir = TempDir::new().unwrap();
    let z = write_ir(dir.path(), "z.json", &json!(["z"]));
    let near = write_ir(
        dir.path(),
        "near_z.json",
        &json!([[[[1.001, 0.0], [0.0, 0.0]], [[0.0, 0.0], [-1.001, 0.0]]]]),
    );

    let strict = qmeas(&["equiv", z.to_str().unwrap(), near.to_str().unwrap()]);
    assert!(stdout(&strict).contains("not equivalent"));

    let loose = qmeas(&[
        "equiv",
        z.to_str().unwrap(),
        near.to_str().unwrap(),
        "--atol",
        "0.01",
    ]);
    assert!(loose.status.success(), "stderr: {}", stderr(&loose));
    assert!(!stdout(&loose).contains("not equivalent"));
}

// ============================================================================
// version
// ============================================================================

#[test]
fn test_version() {
    let output = qmeas(&["version"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("qmeas"));
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}
