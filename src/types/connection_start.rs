//! Pending connect gesture.

use serde::{Deserialize, Serialize};

use super::HandleType;

/// Node and handle a pointer-driven connect gesture started from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStart {
  pub node_id: String,
  pub handle_type: HandleType,
}
