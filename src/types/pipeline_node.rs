//! A node in the pipeline graph.

use serde::{Deserialize, Serialize};

use super::Position;

/// A node in the pipeline graph.
///
/// Ids are minted by [`PipelineStore`](crate::PipelineStore); label and
/// position change by replacing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineNode {
  pub id: String,
  pub position: Position,
  pub label: String,
}

impl PipelineNode {
  pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
    Self {
      id: id.into(),
      position,
      label: label.into(),
    }
  }

  /// Returns a copy of this node placed at `position`.
  pub fn with_position(&self, position: Position) -> Self {
    Self {
      position,
      ..self.clone()
    }
  }
}
