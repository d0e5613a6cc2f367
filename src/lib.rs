//! # pipeline-dag
//!
//! Graph model and incremental DAG validation for an interactive pipeline
//! editor.
//!
//! ## Architecture
//!
//! - `types`: nodes, edges, handles, validation result, export document.
//! - `validation`: pure checks over a `(nodes, edges)` snapshot (cycles,
//!   connectivity, self-loops, dangling and duplicate edges).
//! - `store`: [`PipelineStore`], the single owner of graph, selection and
//!   pending-connection state. Every structural edit revalidates.
//! - `shared`: [`SharedPipelineStore`], a mutex-serialized handle for
//!   multi-threaded callers.
//! - `layout`, `position_source`, `graph_io`: seams for layout, default
//!   placement and export.
//!
//! Rendering, gestures and layout geometry are left to collaborators.

pub mod error;
pub mod graph_io;
#[cfg(test)]
mod graph_io_test;
pub mod layout;
pub mod position_source;
pub mod shared;
#[cfg(test)]
mod shared_test;
pub mod store;
pub mod types;
pub mod validation;

pub use error::PipelineError;
pub use layout::LayoutEngine;
pub use position_source::{CanvasRegion, PositionSource, RandomPositionSource};
pub use shared::SharedPipelineStore;
pub use store::PipelineStore;
pub use types::{
  ConnectionStart, DagValidationResult, GraphDocument, HandleType, PipelineEdge, PipelineNode,
  Position,
};
pub use validation::validate_dag;
