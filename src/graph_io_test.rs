//! Tests for graph document save/load.

use crate::graph_io::{GRAPH_FILENAME, load_graph, save_graph, to_json};
use crate::store::PipelineStore;
use crate::types::Position;

#[test]
fn roundtrip_save_load() {
  let mut s = PipelineStore::new();
  let a = s.add_node("Extract", Some(Position::new(1.0, 2.0)));
  let b = s.add_node("Load", Some(Position::new(3.0, 4.0)));
  s.add_edge(&a, &b).unwrap();

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out").join(GRAPH_FILENAME);
  save_graph(&path, &s.to_document()).unwrap();
  assert!(path.exists());

  let loaded = load_graph(&path).unwrap();
  assert_eq!(loaded, s.to_document());
  assert_eq!(loaded.nodes[0].label, "Extract");
  assert_eq!(loaded.edges[0].source, a);
}

#[test]
fn to_json_is_pretty() {
  let s = PipelineStore::new();
  let json = to_json(&s.to_document()).unwrap();
  assert!(json.contains('\n'));
  assert!(json.contains("\"nodes\": []"));
}

#[test]
fn load_missing_file_returns_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_graph(&dir.path().join("nonexistent.json"));
  assert!(r.is_err());
}

#[test]
fn load_invalid_json_is_invalid_data() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(GRAPH_FILENAME);
  std::fs::write(&path, "{ not json").unwrap();
  let err = load_graph(&path).unwrap_err();
  assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
