//! Canvas position of a node.

use serde::{Deserialize, Serialize};

/// Canvas position of a node. Advisory only: no invariant depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}
