//! Save/load an exported graph document (JSON).

use crate::types::GraphDocument;
use std::path::Path;
use tracing::instrument;

/// Default filename for an exported graph.
pub const GRAPH_FILENAME: &str = "pipeline-graph.json";

/// Pretty-printed JSON for `doc`.
pub fn to_json(doc: &GraphDocument) -> Result<String, std::io::Error> {
  serde_json::to_string_pretty(doc)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Saves a graph document to `path` as JSON, creating parent directories.
#[instrument(level = "trace", skip(path, doc))]
pub fn save_graph(path: &Path, doc: &GraphDocument) -> Result<(), std::io::Error> {
  let json = to_json(doc)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)
}

/// Loads a graph document from `path`. Returns error if file is missing or invalid JSON.
#[instrument(level = "trace", skip(path))]
pub fn load_graph(path: &Path) -> Result<GraphDocument, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
