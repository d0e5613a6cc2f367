//! Seam for the external layout collaborator.
//!
//! Layout geometry lives outside this crate. An engine receives the current
//! graph and returns the same nodes (same ids, same order or not) with new
//! positions; [`PipelineStore::apply_layout`](crate::PipelineStore::apply_layout)
//! feeds the result back through `set_nodes`.

use crate::types::{PipelineEdge, PipelineNode};

/// Repositions nodes without touching ids or edges.
pub trait LayoutEngine {
  fn compute_layout(&self, nodes: &[PipelineNode], edges: &[PipelineEdge]) -> Vec<PipelineNode>;
}

impl<F> LayoutEngine for F
where
  F: Fn(&[PipelineNode], &[PipelineEdge]) -> Vec<PipelineNode>,
{
  fn compute_layout(&self, nodes: &[PipelineNode], edges: &[PipelineEdge]) -> Vec<PipelineNode> {
    self(nodes, edges)
  }
}
