//! Result of validating a pipeline graph as a DAG.

use serde::{Deserialize, Serialize};

/// Snapshot of every DAG check for one `(nodes, edges)` pair.
///
/// Produced by [`validate_dag`](crate::validation::validate_dag) and replaced
/// wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagValidationResult {
  pub is_valid: bool,
  /// Human-readable messages in check order.
  pub errors: Vec<String>,
  pub has_minimum_nodes: bool,
  pub has_no_cycles: bool,
  pub all_nodes_connected: bool,
  pub has_no_self_loops: bool,
  /// Always true; no ambiguous direction is representable.
  pub has_valid_edge_directions: bool,
  /// False when some edge names a node that is not present.
  pub has_no_dangling_edges: bool,
  /// False when two edges share an ordered `(source, target)` pair.
  pub has_no_duplicate_edges: bool,
  /// False when a node id or an edge id appears twice in its collection.
  pub has_unique_ids: bool,
}

impl DagValidationResult {
  /// Number of checks that failed.
  pub fn failed_checks(&self) -> usize {
    [
      self.has_minimum_nodes,
      self.has_no_cycles,
      self.all_nodes_connected,
      self.has_no_self_loops,
      self.has_valid_edge_directions,
      self.has_no_dangling_edges,
      self.has_no_duplicate_edges,
      self.has_unique_ids,
    ]
    .iter()
    .filter(|ok| !**ok)
    .count()
  }
}
