//! The prompt -> content -> citation graph and the pure functions that lay it
//! out, filter its edges and summarise a selection.

pub mod filter;
pub mod layout;
pub mod stats;
pub mod style;
pub mod types;

pub use filter::visible_edges;
pub use layout::{Position, assign_positions};
pub use stats::{SelectionStats, compute_stats};
pub use style::{NodeShape, ShapeKind, Styled, edge_segments, to_shape};
pub use types::{
	CitationStrength, Edge, EdgeKind, Graph, GraphError, Layer, Node, NodeAttributes, Platform,
	PriorityLevel, PublishStatus,
};
