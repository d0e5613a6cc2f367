//! Pipeline graph entities: nodes, edges, handles, the pending connection,
//! the validation result and the export document.

mod connection_start;
mod graph_document;
mod handle_type;
mod pipeline_edge;
mod pipeline_node;
mod position;
mod validation_result;

pub use connection_start::ConnectionStart;
pub use graph_document::{DocumentEdge, DocumentNode, GraphDocument};
pub use handle_type::HandleType;
pub use pipeline_edge::PipelineEdge;
pub use pipeline_node::PipelineNode;
pub use position::Position;
pub use validation_result::DagValidationResult;
