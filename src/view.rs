use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::graph::{
	Edge, Graph, NodeShape, Position, SelectionStats, assign_positions, compute_stats, to_shape,
	visible_edges,
};
use crate::store::AppState;

/// Everything derived from the graph for one set of inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphView {
	pub focus: Option<String>,
	/// Layered positions of the nodes the filters keep.
	pub positions: HashMap<String, Position>,
	pub visible_edges: Vec<Edge>,
	pub stats: SelectionStats,
	pub shapes: HashMap<String, NodeShape>,
}

impl GraphView {
	pub fn compute(
		graph: &Graph,
		state: &AppState,
		width: f64,
		height: f64,
		config: &GraphConfig,
	) -> Self {
		let layers = graph.nodes_by_layer(|n| state.filters.shows(n));
		let focus = state.focus.as_deref();

		Self {
			focus: state.focus.clone(),
			positions: assign_positions(&layers, width, height, config.columns),
			visible_edges: visible_edges(graph.edges(), focus, state.show_all)
				.into_iter()
				.cloned()
				.collect(),
			stats: compute_stats(graph.edges(), focus),
			shapes: graph
				.nodes()
				.iter()
				.map(|n| (n.id.clone(), to_shape(n, config)))
				.collect(),
		}
	}

	pub fn is_visible(&self, id: &str) -> bool {
		self.positions.contains_key(id)
	}
}
