//! Export document: the plain `{nodes, edges}` shape handed to serializers.

use serde::{Deserialize, Serialize};

use super::{PipelineEdge, PipelineNode, Position};

/// Node as written to an exported graph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
  pub id: String,
  pub label: String,
  pub position: Position,
}

/// Edge as written to an exported graph document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEdge {
  pub id: String,
  pub source: String,
  pub target: String,
}

/// Read-only export of a graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
  pub nodes: Vec<DocumentNode>,
  pub edges: Vec<DocumentEdge>,
}

impl GraphDocument {
  pub fn from_graph(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> Self {
    Self {
      nodes: nodes
        .iter()
        .map(|n| DocumentNode {
          id: n.id.clone(),
          label: n.label.clone(),
          position: n.position,
        })
        .collect(),
      edges: edges
        .iter()
        .map(|e| DocumentEdge {
          id: e.id.clone(),
          source: e.source.clone(),
          target: e.target.clone(),
        })
        .collect(),
    }
  }

  /// Converts back into graph entities. Edges get the fixed handle roles.
  pub fn into_parts(self) -> (Vec<PipelineNode>, Vec<PipelineEdge>) {
    let nodes = self
      .nodes
      .into_iter()
      .map(|n| PipelineNode::new(n.id, n.label, n.position))
      .collect();
    let edges = self
      .edges
      .into_iter()
      .map(|e| PipelineEdge::new(e.id, e.source, e.target))
      .collect();
    (nodes, edges)
  }
}
