//! DAG validation for a `(nodes, edges)` snapshot.
//!
//! Every check runs on every call so the result reports all problems at once.
//! All functions are pure and O(V+E).

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::types::{DagValidationResult, PipelineEdge, PipelineNode};

pub const MSG_EMPTY: &str = "Graph is empty";
pub const MSG_TOO_FEW_NODES: &str = "Graph needs at least 2 nodes";
pub const MSG_CYCLE: &str = "Graph contains cycles (not a DAG)";
pub const MSG_NOT_CONNECTED: &str = "All nodes must be part of at least one edge";
pub const MSG_SELF_LOOP: &str = "Self-loops are not allowed";
pub const MSG_DANGLING_EDGE: &str = "Edges must connect existing nodes";
pub const MSG_DUPLICATE_EDGE: &str = "Duplicate edges between the same nodes are not allowed";
pub const MSG_DUPLICATE_ID: &str = "Node and edge ids must be unique";

/// Validates the graph as a pipeline DAG.
#[instrument(level = "trace", skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn validate_dag(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> DagValidationResult {
  let mut errors = Vec::new();

  let has_minimum_nodes = nodes.len() >= 2;
  if !has_minimum_nodes {
    let msg = if nodes.is_empty() {
      MSG_EMPTY
    } else {
      MSG_TOO_FEW_NODES
    };
    errors.push(msg.to_string());
  }

  let has_no_cycles = !has_cycle(nodes, edges);
  if !has_no_cycles {
    errors.push(MSG_CYCLE.to_string());
  }

  let all_connected = all_nodes_connected(nodes, edges);
  if !all_connected && !nodes.is_empty() {
    errors.push(MSG_NOT_CONNECTED.to_string());
  }

  let has_no_self_loops = !edges.iter().any(PipelineEdge::is_self_loop);
  if !has_no_self_loops {
    errors.push(MSG_SELF_LOOP.to_string());
  }

  let has_valid_edge_directions = true;

  let has_no_dangling_edges = !has_dangling_edge(nodes, edges);
  if !has_no_dangling_edges {
    errors.push(MSG_DANGLING_EDGE.to_string());
  }

  let has_no_duplicate_edges = !has_duplicate_edge(edges);
  if !has_no_duplicate_edges {
    errors.push(MSG_DUPLICATE_EDGE.to_string());
  }

  let unique_ids = has_unique_ids(nodes, edges);
  if !unique_ids {
    errors.push(MSG_DUPLICATE_ID.to_string());
  }

  let is_valid = has_minimum_nodes
    && has_no_cycles
    && all_connected
    && has_no_self_loops
    && has_valid_edge_directions
    && has_no_dangling_edges
    && has_no_duplicate_edges
    && unique_ids;

  DagValidationResult {
    is_valid,
    errors,
    has_minimum_nodes,
    has_no_cycles,
    all_nodes_connected: all_connected,
    has_no_self_loops,
    has_valid_edge_directions,
    has_no_dangling_edges,
    has_no_duplicate_edges,
    has_unique_ids: unique_ids,
  }
}

/// Returns true if some traversal finds a back edge.
///
/// Depth-first from every unvisited node in node order, following edges in
/// edge order. Uses an explicit stack of `(node, next neighbour index)` frames
/// so deep chains cannot overflow the call stack.
pub fn has_cycle(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> bool {
  let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::with_capacity(nodes.len());
  for n in nodes {
    adjacency.insert(n.id.as_str(), Vec::new());
  }
  for e in edges {
    adjacency
      .entry(e.source.as_str())
      .or_default()
      .push(e.target.as_str());
  }

  let mut visited: HashSet<&str> = HashSet::with_capacity(nodes.len());
  let mut on_stack: HashSet<&str> = HashSet::new();
  let mut stack: Vec<(&str, usize)> = Vec::new();

  for root in nodes {
    let root = root.id.as_str();
    if visited.contains(root) {
      continue;
    }
    visited.insert(root);
    on_stack.insert(root);
    stack.push((root, 0));

    while let Some((current, next)) = stack.last_mut() {
      let neighbors = adjacency.get(*current).map(Vec::as_slice).unwrap_or(&[]);
      if let Some(&neighbor) = neighbors.get(*next) {
        *next += 1;
        if !visited.contains(neighbor) {
          visited.insert(neighbor);
          on_stack.insert(neighbor);
          stack.push((neighbor, 0));
        } else if on_stack.contains(neighbor) {
          return true;
        }
      } else {
        on_stack.remove(*current);
        stack.pop();
      }
    }
  }

  false
}

/// Returns true if every node is an endpoint of at least one edge.
///
/// Graphs with fewer than two nodes are never connected.
pub fn all_nodes_connected(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> bool {
  if nodes.len() < 2 {
    return false;
  }
  let touched: HashSet<&str> = edges
    .iter()
    .flat_map(|e| [e.source.as_str(), e.target.as_str()])
    .collect();
  nodes.iter().all(|n| touched.contains(n.id.as_str()))
}

fn has_dangling_edge(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> bool {
  let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
  edges
    .iter()
    .any(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
}

fn has_duplicate_edge(edges: &[PipelineEdge]) -> bool {
  let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());
  edges
    .iter()
    .any(|e| !seen.insert((e.source.as_str(), e.target.as_str())))
}

/// Node ids and edge ids are checked separately; a node may share an id with
/// an edge.
fn has_unique_ids(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> bool {
  let mut node_ids: HashSet<&str> = HashSet::with_capacity(nodes.len());
  let mut edge_ids: HashSet<&str> = HashSet::with_capacity(edges.len());
  nodes.iter().all(|n| node_ids.insert(n.id.as_str()))
    && edges.iter().all(|e| edge_ids.insert(e.id.as_str()))
}
