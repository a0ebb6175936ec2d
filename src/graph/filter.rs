use std::collections::HashSet;

use super::types::Edge;

/// Edges to draw for the current selection.
///
/// `show_all` wins over everything. Without a focus nothing is drawn.
/// Otherwise the result holds the focus node's own outgoing edges plus the
/// outgoing edges of every node those reach, in input order. The expansion
/// is a fixed two hops, which covers prompt -> content -> citation when a
/// prompt is focused; other layers are filtered by the same literal rule.
pub fn visible_edges<'a>(edges: &'a [Edge], focus: Option<&str>, show_all: bool) -> Vec<&'a Edge> {
	if show_all {
		return edges.iter().collect();
	}
	let Some(focus) = focus else {
		return Vec::new();
	};

	let first_hop = first_hop_targets(edges, focus);
	edges
		.iter()
		.filter(|e| e.source == focus || first_hop.contains(&*e.source))
		.collect()
}

pub(crate) fn first_hop_targets<'a>(edges: &'a [Edge], focus: &str) -> HashSet<&'a str> {
	edges
		.iter()
		.filter(|e| e.source == focus)
		.map(|e| e.target.as_str())
		.collect()
}
