//! A directed edge in the pipeline graph.

use serde::{Deserialize, Serialize};

use super::HandleType;

/// A directed edge between two nodes. Endpoints never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEdge {
  pub id: String,
  pub source: String,
  pub target: String,
  pub source_handle: HandleType,
  pub target_handle: HandleType,
}

impl PipelineEdge {
  /// Edge leaving `source` through its outgoing handle and entering `target`
  /// through its incoming handle.
  pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      source_handle: HandleType::Source,
      target_handle: HandleType::Target,
    }
  }

  /// True if `node_id` is either endpoint.
  pub fn touches(&self, node_id: &str) -> bool {
    self.source == node_id || self.target == node_id
  }

  /// True if this edge runs from `source` to `target` (direction matters).
  pub fn connects(&self, source: &str, target: &str) -> bool {
    self.source == source && self.target == target
  }

  /// True if both endpoints are the same node.
  pub fn is_self_loop(&self) -> bool {
    self.source == self.target
  }
}
