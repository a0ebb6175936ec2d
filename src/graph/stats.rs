use std::collections::HashSet;

use super::filter::first_hop_targets;
use super::types::Edge;

/// Counts shown in the selection panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionStats {
	/// Outgoing edges of the focus node. Duplicate edges count twice.
	pub content_count: usize,
	/// Distinct targets of the second hop.
	pub citation_count: usize,
}

pub fn compute_stats(edges: &[Edge], focus: Option<&str>) -> SelectionStats {
	let Some(focus) = focus else {
		return SelectionStats::default();
	};

	let first_hop = first_hop_targets(edges, focus);
	let content_count = edges.iter().filter(|e| e.source == focus).count();
	let citations: HashSet<&str> = edges
		.iter()
		.filter(|e| first_hop.contains(e.source.as_str()))
		.map(|e| e.target.as_str())
		.collect();

	SelectionStats {
		content_count,
		citation_count: citations.len(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::EdgeKind::{ContentToCitation, PromptToContent};

	#[test]
	fn counts_contents_and_distinct_citations() {
		let edges = vec![
			Edge::new("P1", "C1", PromptToContent),
			Edge::new("P1", "C2", PromptToContent),
			Edge::new("C1", "Ct1", ContentToCitation),
			Edge::new("C2", "Ct2", ContentToCitation),
			Edge::new("C3", "Ct3", ContentToCitation),
		];
		assert_eq!(
			compute_stats(&edges, Some("P1")),
			SelectionStats {
				content_count: 2,
				citation_count: 2,
			}
		);
	}

	#[test]
	fn shared_platform_counted_once() {
		let edges = vec![
			Edge::new("P1", "C1", PromptToContent),
			Edge::new("P1", "C2", PromptToContent),
			Edge::new("C1", "youtube", ContentToCitation),
			Edge::new("C2", "youtube", ContentToCitation),
		];
		let stats = compute_stats(&edges, Some("P1"));
		assert_eq!(stats.content_count, 2);
		assert_eq!(stats.citation_count, 1);
	}

	#[test]
	fn duplicate_edges_overcount_contents() {
		let edges = vec![
			Edge::new("P1", "C1", PromptToContent),
			Edge::new("P1", "C1", PromptToContent),
		];
		assert_eq!(compute_stats(&edges, Some("P1")).content_count, 2);
	}

	#[test]
	fn no_focus_is_zero() {
		let edges = vec![Edge::new("P1", "C1", PromptToContent)];
		assert_eq!(compute_stats(&edges, None), SelectionStats::default());
	}
}
