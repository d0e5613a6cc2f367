//! Owner of the editable pipeline graph.
//!
//! Every structural mutation rebuilds the affected collections, recomputes
//! [`DagValidationResult`] and installs both together, so callers never see
//! entities and validation out of step.

use std::collections::HashSet;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::PipelineError;
use crate::layout::LayoutEngine;
use crate::position_source::{PositionSource, RandomPositionSource};
use crate::types::{
  ConnectionStart, DagValidationResult, GraphDocument, HandleType, PipelineEdge, PipelineNode,
  Position,
};
use crate::validation::validate_dag;

fn new_id() -> String {
  Uuid::new_v4().to_string()
}

/// Graph nodes and edges with selection, pending connection and validation.
pub struct PipelineStore {
  nodes: Vec<PipelineNode>,
  edges: Vec<PipelineEdge>,
  selected_nodes: Vec<String>,
  selected_edges: Vec<String>,
  validation: DagValidationResult,
  connection_start: Option<ConnectionStart>,
  positions: Box<dyn PositionSource>,
}

impl std::fmt::Debug for PipelineStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PipelineStore")
      .field("nodes", &self.nodes)
      .field("edges", &self.edges)
      .field("selected_nodes", &self.selected_nodes)
      .field("selected_edges", &self.selected_edges)
      .field("validation", &self.validation)
      .field("connection_start", &self.connection_start)
      .finish_non_exhaustive()
  }
}

impl Default for PipelineStore {
  fn default() -> Self {
    Self::new()
  }
}

impl PipelineStore {
  /// Empty graph; default positions are random over the default canvas region.
  pub fn new() -> Self {
    Self::with_position_source(RandomPositionSource::default())
  }

  /// Empty graph drawing default positions from `positions`.
  pub fn with_position_source(positions: impl PositionSource + 'static) -> Self {
    Self {
      nodes: Vec::new(),
      edges: Vec::new(),
      selected_nodes: Vec::new(),
      selected_edges: Vec::new(),
      validation: validate_dag(&[], &[]),
      connection_start: None,
      positions: Box::new(positions),
    }
  }

  /// Installs an imported graph as-is and validates it.
  ///
  /// Nothing is repaired: dangling or duplicate edges in `doc` show up in
  /// [`validation`](Self::validation).
  #[instrument(level = "trace", skip(doc), fields(nodes = doc.nodes.len(), edges = doc.edges.len()))]
  pub fn from_document(doc: GraphDocument) -> Self {
    let mut store = Self::new();
    let (nodes, edges) = doc.into_parts();
    store.commit(nodes, edges);
    if !store.validation.is_valid {
      debug!(errors = ?store.validation.errors, "imported graph is not a valid DAG");
    }
    store
  }

  /// Nodes in insertion order.
  pub fn nodes(&self) -> &[PipelineNode] {
    &self.nodes
  }

  pub fn edges(&self) -> &[PipelineEdge] {
    &self.edges
  }

  /// Looks up a node by id.
  pub fn node(&self, id: &str) -> Option<&PipelineNode> {
    self.nodes.iter().find(|n| n.id == id)
  }

  /// Looks up an edge by id.
  pub fn edge(&self, id: &str) -> Option<&PipelineEdge> {
    self.edges.iter().find(|e| e.id == id)
  }

  pub fn selected_nodes(&self) -> &[String] {
    &self.selected_nodes
  }

  pub fn selected_edges(&self) -> &[String] {
    &self.selected_edges
  }

  /// Result of the last validation pass.
  pub fn validation(&self) -> &DagValidationResult {
    &self.validation
  }

  pub fn is_connecting(&self) -> bool {
    self.connection_start.is_some()
  }

  /// Where the pending connect gesture began, if any.
  pub fn connection_start(&self) -> Option<&ConnectionStart> {
    self.connection_start.as_ref()
  }

  /// Export view of the current graph.
  pub fn to_document(&self) -> GraphDocument {
    GraphDocument::from_graph(&self.nodes, &self.edges)
  }

  /// Installs new collections together with their validation result.
  fn commit(&mut self, nodes: Vec<PipelineNode>, edges: Vec<PipelineEdge>) {
    let validation = validate_dag(&nodes, &edges);
    self.nodes = nodes;
    self.edges = edges;
    self.validation = validation;
  }

  /// Adds a node and returns its id. Without `position`, one is drawn from the
  /// store's position source.
  #[instrument(level = "trace", skip(self, label))]
  pub fn add_node(&mut self, label: impl Into<String>, position: Option<Position>) -> String {
    let position = position.unwrap_or_else(|| self.positions.next_position());
    let node = PipelineNode::new(new_id(), label, position);
    let id = node.id.clone();
    debug!(node_id = %id, label = %node.label, "add node");
    let mut nodes = self.nodes.clone();
    nodes.push(node);
    let edges = self.edges.clone();
    self.commit(nodes, edges);
    id
  }

  /// Removes a node and every edge touching it. Missing ids are a no-op.
  #[instrument(level = "trace", skip(self))]
  pub fn delete_node(&mut self, id: &str) {
    let nodes: Vec<PipelineNode> = self.nodes.iter().filter(|n| n.id != id).cloned().collect();
    let (edges, removed): (Vec<PipelineEdge>, Vec<PipelineEdge>) =
      self.edges.iter().cloned().partition(|e| !e.touches(id));
    debug!(node_id = %id, cascaded_edges = removed.len(), "delete node");
    let removed: HashSet<&str> = removed.iter().map(|e| e.id.as_str()).collect();
    self.selected_nodes.retain(|n| n != id);
    self.selected_edges.retain(|e| !removed.contains(e.as_str()));
    self.commit(nodes, edges);
  }

  /// Connects `source` to `target` and returns the new edge id.
  ///
  /// Rejected without touching state when the edge would be a self-loop,
  /// already exists in that direction, or names a missing node. A successful
  /// connection ends any pending connect gesture.
  #[instrument(level = "trace", skip(self))]
  pub fn add_edge(&mut self, source: &str, target: &str) -> Result<String, PipelineError> {
    if source == target {
      warn!(node_id = %source, "rejected self-loop");
      return Err(PipelineError::SelfLoop {
        node_id: source.to_string(),
      });
    }
    if self.edges.iter().any(|e| e.connects(source, target)) {
      warn!(source, target, "rejected duplicate edge");
      return Err(PipelineError::DuplicateEdge {
        source_id: source.to_string(),
        target_id: target.to_string(),
      });
    }
    if let Some(missing) = [source, target].into_iter().find(|id| self.node(id).is_none()) {
      warn!(node_id = %missing, "rejected edge to unknown node");
      return Err(PipelineError::UnknownNode {
        node_id: missing.to_string(),
      });
    }

    let edge = PipelineEdge::new(new_id(), source, target);
    let id = edge.id.clone();
    debug!(edge_id = %id, source, target, "add edge");
    let nodes = self.nodes.clone();
    let mut edges = self.edges.clone();
    edges.push(edge);
    self.commit(nodes, edges);
    self.connection_start = None;
    Ok(id)
  }

  /// Removes an edge. Missing ids are a no-op.
  #[instrument(level = "trace", skip(self))]
  pub fn delete_edge(&mut self, id: &str) {
    let edges: Vec<PipelineEdge> = self.edges.iter().filter(|e| e.id != id).cloned().collect();
    debug!(edge_id = %id, "delete edge");
    self.selected_edges.retain(|e| e != id);
    let nodes = self.nodes.clone();
    self.commit(nodes, edges);
  }

  /// Moves a node. Layout only: validation is left as is.
  #[instrument(level = "trace", skip(self))]
  pub fn update_node_position(&mut self, id: &str, position: Position) {
    if let Some(slot) = self.nodes.iter_mut().find(|n| n.id == id) {
      *slot = slot.with_position(position);
    }
  }

  /// Replaces every node (e.g. after a layout pass) and revalidates against
  /// the current edges.
  #[instrument(level = "trace", skip_all, fields(nodes = nodes.len()))]
  pub fn set_nodes(&mut self, nodes: Vec<PipelineNode>) {
    let edges = self.edges.clone();
    self.commit(nodes, edges);
  }

  /// Runs `engine` on the current graph and installs the repositioned nodes.
  #[instrument(level = "trace", skip_all)]
  pub fn apply_layout(&mut self, engine: &dyn LayoutEngine) {
    let nodes = engine.compute_layout(&self.nodes, &self.edges);
    debug!(nodes = nodes.len(), "apply layout");
    self.set_nodes(nodes);
  }

  /// Replaces the node selection verbatim.
  pub fn set_selected_nodes(&mut self, ids: Vec<String>) {
    self.selected_nodes = ids;
  }

  /// Replaces the edge selection verbatim.
  pub fn set_selected_edges(&mut self, ids: Vec<String>) {
    self.selected_edges = ids;
  }

  /// Empties both selections.
  pub fn clear_selection(&mut self) {
    self.selected_nodes.clear();
    self.selected_edges.clear();
  }

  /// Selects every node and every edge.
  pub fn select_all(&mut self) {
    self.selected_nodes = self.nodes.iter().map(|n| n.id.clone()).collect();
    self.selected_edges = self.edges.iter().map(|e| e.id.clone()).collect();
  }

  /// Deletes selected nodes, selected edges and edges touching a deleted
  /// node, clears the selection and revalidates once.
  #[instrument(level = "trace", skip(self))]
  pub fn delete_selected(&mut self) {
    let doomed_nodes: HashSet<&str> = self.selected_nodes.iter().map(String::as_str).collect();
    let doomed_edges: HashSet<&str> = self.selected_edges.iter().map(String::as_str).collect();

    let nodes: Vec<PipelineNode> = self
      .nodes
      .iter()
      .filter(|n| !doomed_nodes.contains(n.id.as_str()))
      .cloned()
      .collect();
    let edges: Vec<PipelineEdge> = self
      .edges
      .iter()
      .filter(|e| {
        !doomed_edges.contains(e.id.as_str())
          && !doomed_nodes.contains(e.source.as_str())
          && !doomed_nodes.contains(e.target.as_str())
      })
      .cloned()
      .collect();

    debug!(
      nodes_removed = self.nodes.len() - nodes.len(),
      edges_removed = self.edges.len() - edges.len(),
      "delete selected"
    );
    self.selected_nodes.clear();
    self.selected_edges.clear();
    self.commit(nodes, edges);
  }

  /// Enters the connecting state from `node_id`'s `handle_type` handle.
  #[instrument(level = "trace", skip(self))]
  pub fn start_connection(&mut self, node_id: &str, handle_type: HandleType) {
    self.connection_start = Some(ConnectionStart {
      node_id: node_id.to_string(),
      handle_type,
    });
  }

  /// Leaves the connecting state. No-op when idle.
  pub fn end_connection(&mut self) {
    self.connection_start = None;
  }

  /// Recomputes validation from the current nodes and edges.
  #[instrument(level = "trace", skip(self))]
  pub fn validate_graph(&mut self) -> &DagValidationResult {
    self.validation = validate_dag(&self.nodes, &self.edges);
    &self.validation
  }
}
