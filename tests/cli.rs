//! Integration tests for the pipeline_dag CLI. Runs the binary via
//! `cargo run --bin pipeline_dag` against temp graph documents.

use std::path::Path;
use std::process::Command;

/// Run `cargo run --bin pipeline_dag -- <args...>` from the crate root.
fn run_pipeline_dag(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
  let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
  let mut cmd = Command::new(cargo.as_str());
  cmd
    .args(["run", "--quiet", "--bin", "pipeline_dag", "--"])
    .args(args)
    .env_remove("PIPELINE_DAG_OUTPUT")
    .current_dir(env!("CARGO_MANIFEST_DIR"));
  for (k, v) in env {
    cmd.env(k, v);
  }
  cmd.output().expect("cargo run --bin pipeline_dag")
}

fn write(dir: &Path, name: &str, json: &str) -> String {
  let path = dir.join(name);
  std::fs::write(&path, json).unwrap();
  path.to_str().expect("path").to_string()
}

const VALID: &str = r#"{
  "nodes": [
    {"id": "a", "label": "Extract", "position": {"x": 0.0, "y": 0.0}},
    {"id": "b", "label": "Load", "position": {"x": 200.0, "y": 0.0}}
  ],
  "edges": [{"id": "e1", "source": "a", "target": "b"}]
}"#;

const CYCLIC: &str = r#"{
  "nodes": [
    {"id": "a", "label": "A", "position": {"x": 0.0, "y": 0.0}},
    {"id": "b", "label": "B", "position": {"x": 0.0, "y": 0.0}}
  ],
  "edges": [
    {"id": "e1", "source": "a", "target": "b"},
    {"id": "e2", "source": "b", "target": "a"}
  ]
}"#;

#[test]
fn valid_graph_succeeds() {
  let dir = tempfile::tempdir().unwrap();
  let path = write(dir.path(), "valid.json", VALID);
  let out = run_pipeline_dag(&[&path], &[]);
  assert!(
    out.status.success(),
    "stderr={}",
    String::from_utf8_lossy(&out.stderr)
  );
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("2 nodes, 1 edges"));
  assert!(stdout.contains("Valid DAG."));
}

#[test]
fn cyclic_graph_fails_with_message() {
  let dir = tempfile::tempdir().unwrap();
  let path = write(dir.path(), "cyclic.json", CYCLIC);
  let out = run_pipeline_dag(&[&path], &[]);
  assert!(!out.status.success());
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("Invalid DAG:"));
  assert!(stdout.contains("Graph contains cycles (not a DAG)"));
  assert!(stdout.contains("Failed checks: 1"));
}

#[test]
fn json_format_prints_report() {
  let dir = tempfile::tempdir().unwrap();
  let path = write(dir.path(), "valid.json", VALID);
  let out = run_pipeline_dag(&["--format", "json", &path], &[]);
  assert!(out.status.success());
  let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(report["is_valid"], true);
  assert_eq!(report["errors"], serde_json::json!([]));
}

#[test]
fn env_overrides_format_flag() {
  let dir = tempfile::tempdir().unwrap();
  let path = write(dir.path(), "cyclic.json", CYCLIC);
  let out = run_pipeline_dag(&[&path], &[("PIPELINE_DAG_OUTPUT", "json")]);
  assert!(!out.status.success());
  let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(report["has_no_cycles"], false);
}

#[test]
fn missing_file_fails() {
  let out = run_pipeline_dag(&["/nonexistent/graph.json"], &[]);
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Error reading"));
}

#[test]
fn prints_usage_without_args() {
  let out = run_pipeline_dag(&[], &[]);
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Usage") || stderr.contains("usage"));
}
