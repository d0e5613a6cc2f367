//! Errors for rejected store mutations.

use thiserror::Error;

/// Why [`PipelineStore::add_edge`](crate::PipelineStore::add_edge) refused a
/// connection. State is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
  #[error("Self-loops are not allowed (node '{node_id}')")]
  SelfLoop { node_id: String },

  #[error("Edge already exists between these nodes ('{source_id}' -> '{target_id}')")]
  DuplicateEdge { source_id: String, target_id: String },

  #[error("Node '{node_id}' does not exist")]
  UnknownNode { node_id: String },
}
