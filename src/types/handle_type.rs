//! Role of a node handle in a connection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which end of a node a connection leaves from or arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleType {
  /// Outgoing end.
  Source,
  /// Incoming end.
  Target,
}

impl fmt::Display for HandleType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HandleType::Source => write!(f, "source"),
      HandleType::Target => write!(f, "target"),
    }
  }
}
