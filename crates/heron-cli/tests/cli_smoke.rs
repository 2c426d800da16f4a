use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("maps").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn layout_json(args: &[&str]) -> serde_json::Value {
    let exe = assert_cmd::cargo_bin!("heron-cli");
    let output = Command::new(exe).args(args).output().expect("run heron-cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_lays_out_a_diamond_orthogonally() {
    let path = fixture("diamond.json");
    let out = layout_json(&["layout", path.to_string_lossy().as_ref()]);

    let nodes = out["nodes"].as_array().expect("nodes");
    let ids: Vec<&str> = nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["start", "review", "ship", "build"]);

    let ship = &nodes[2];
    assert_eq!(ship["parents"], serde_json::json!(["review", "build"]));
    assert_eq!(ship["depth"], 2);
    assert_eq!(ship["offset"], 1);
    assert_eq!(ship["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn cli_lays_out_a_tree_with_widths() {
    let path = fixture("tree.json");
    let out = layout_json(&["--engine", "tree", path.to_string_lossy().as_ref()]);

    let nodes = out["nodes"].as_array().expect("nodes");
    assert_eq!(nodes[0]["id"], "root");
    assert_eq!(nodes[0]["width"], 3);
    assert_eq!(nodes[2]["id"], "b");
    assert_eq!(nodes[2]["offset"], 3);
}

#[test]
fn cli_prints_widths() {
    let path = fixture("tree.json");
    let out = layout_json(&["widths", path.to_string_lossy().as_ref()]);
    assert_eq!(
        out,
        serde_json::json!({ "a": 2, "b": 1, "c": 1, "d": 1, "root": 3 })
    );
}

#[test]
fn cli_reads_stdin_and_writes_out_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out_path = tmp.path().join("layout.json");
    let input = fs::read_to_string(fixture("tree.json")).expect("read fixture");

    let exe = assert_cmd::cargo_bin!("heron-cli");
    assert_cmd::Command::new(exe)
        .args(["--pretty", "--out", out_path.to_string_lossy().as_ref(), "-"])
        .write_stdin(input)
        .assert()
        .success();

    let text = fs::read_to_string(&out_path).expect("read output");
    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).expect("output is JSON");
    assert_eq!(value["nodes"][0]["id"], "root");
}

#[test]
fn cli_check_rejects_cycles() {
    let exe = assert_cmd::cargo_bin!("heron-cli");
    let output = Command::new(exe)
        .args(["check", fixture("cycle.json").to_string_lossy().as_ref()])
        .output()
        .expect("run heron-cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
}

#[test]
fn cli_check_accepts_valid_maps() {
    let exe = assert_cmd::cargo_bin!("heron-cli");
    Command::new(exe)
        .args(["check", fixture("diamond.json").to_string_lossy().as_ref()])
        .assert()
        .success();
}

#[test]
fn cli_reports_usage_errors_with_exit_code_2() {
    let exe = assert_cmd::cargo_bin!("heron-cli");
    let output = Command::new(exe)
        .args(["--engine", "radial"])
        .output()
        .expect("run heron-cli");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}
