//! Maps nodes to the shape, colour and label the canvas draws for them.

use super::layout::Position;
use super::types::{Edge, Layer, Node, NodeAttributes, Platform, PriorityLevel, PublishStatus};
use crate::config::GraphConfig;

const FALLBACK_COLOR: &str = "#9e9e9e";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	#[default]
	Circle,
	Rect,
	Triangle,
}

impl From<Layer> for ShapeKind {
	fn from(layer: Layer) -> Self {
		match layer {
			Layer::Prompt => Self::Circle,
			Layer::Content => Self::Rect,
			Layer::Citation => Self::Triangle,
		}
	}
}

/// Colour plus legend text for one category value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
	pub color: &'static str,
	pub legend: String,
}

pub trait Styled {
	fn style(&self) -> StyleDescriptor;
}

impl Styled for PriorityLevel {
	fn style(&self) -> StyleDescriptor {
		let (color, legend) = match self {
			Self::P0 => ("#f44336", "P0 critical"),
			Self::P1 => ("#ff9800", "P1 high"),
			Self::P2 => ("#8bc34a", "P2 medium"),
			Self::P3 => ("#90a4ae", "P3 low"),
		};
		StyleDescriptor {
			color,
			legend: legend.into(),
		}
	}
}

impl Styled for PublishStatus {
	fn style(&self) -> StyleDescriptor {
		let (color, legend) = match self {
			Self::Published => ("#4caf50", "Published"),
			Self::Draft => ("#ffc107", "Draft"),
			Self::Planned => ("#2196f3", "Planned"),
		};
		StyleDescriptor {
			color,
			legend: legend.into(),
		}
	}
}

impl Styled for Platform {
	fn style(&self) -> StyleDescriptor {
		let color = match self {
			Self::ChatGpt => "#10a37f",
			Self::Perplexity => "#20808d",
			Self::Claude => "#d97757",
			Self::Gemini => "#8e75b2",
			Self::GoogleAiOverview => "#4285f4",
			Self::YouTube => "#ff0000",
			Self::Reddit => "#ff4500",
			Self::Other(_) => FALLBACK_COLOR,
		};
		StyleDescriptor {
			color,
			legend: self.name().to_string(),
		}
	}
}

/// Everything the drawing surface needs to paint one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeShape {
	pub kind: ShapeKind,
	pub fill: String,
	pub size: f64,
	/// On-canvas text, possibly truncated.
	pub label: String,
	/// Full name for tooltips.
	pub tooltip: String,
}

pub fn to_shape(node: &Node, config: &GraphConfig) -> NodeShape {
	let (fill, size) = match &node.attributes {
		NodeAttributes::Prompt {
			priority, score, ..
		} => (priority.style().color.to_string(), score / config.score_divisor),
		NodeAttributes::Content { status, .. } => {
			(status.style().color.to_string(), config.content_size)
		}
		NodeAttributes::Citation { platform, color } => (
			color
				.clone()
				.unwrap_or_else(|| platform.style().color.to_string()),
			config.citation_size,
		),
	};

	NodeShape {
		kind: node.layer().into(),
		fill,
		size,
		label: truncate_label(&node.name, config.label_max_chars),
		tooltip: node.name.clone(),
	}
}

/// Cuts `name` to `max` characters and appends `...` when it is longer.
pub fn truncate_label(name: &str, max: usize) -> String {
	match name.char_indices().nth(max) {
		Some((cut, _)) => format!("{}...", &name[..cut]),
		None => name.to_string(),
	}
}

/// A drawable line between two positioned endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment<'a> {
	pub edge: &'a Edge,
	pub from: Position,
	pub to: Position,
}

/// Resolves edges to segments, skipping any edge with an endpoint that has
/// no position (hidden by a filter or absent from the graph).
pub fn edge_segments<'a>(
	edges: &[&'a Edge],
	locate: impl Fn(&str) -> Option<Position>,
) -> Vec<EdgeSegment<'a>> {
	edges
		.iter()
		.filter_map(|&edge| {
			Some(EdgeSegment {
				edge,
				from: locate(edge.source.as_str())?,
				to: locate(edge.target.as_str())?,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::graph::types::EdgeKind;

	fn draft_content() -> Node {
		Node::content("c", "c", "Blog", PublishStatus::Draft)
	}

	#[test]
	fn shape_follows_layer() {
		let config = GraphConfig::default();
		let prompt = Node::prompt("p", "prompt", PriorityLevel::P0, 150.0);
		let content = Node::content("c", "content", "Blog", PublishStatus::Published);
		let citation = Node::citation("ct", "YouTube", Platform::YouTube);

		assert_eq!(to_shape(&prompt, &config).kind, ShapeKind::Circle);
		assert_eq!(to_shape(&content, &config).kind, ShapeKind::Rect);
		assert_eq!(to_shape(&citation, &config).kind, ShapeKind::Triangle);
	}

	#[test]
	fn colours_come_from_lookup_tables() {
		let config = GraphConfig::default();
		let p0 = to_shape(&Node::prompt("p", "p", PriorityLevel::P0, 10.0), &config);
		let draft = to_shape(&draft_content(), &config);
		let reddit = to_shape(&Node::citation("r", "Reddit", Platform::Reddit), &config);

		assert_eq!(p0.fill, PriorityLevel::P0.style().color);
		assert_eq!(draft.fill, PublishStatus::Draft.style().color);
		assert_eq!(reddit.fill, "#ff4500");
	}

	#[test]
	fn platform_legend_names_the_platform() {
		assert_eq!(Platform::ChatGpt.style().legend, "ChatGPT");
		let overview = Platform::GoogleAiOverview.style();
		assert_eq!(overview.legend, "Google AI Overview");

		let bing = Platform::Other("Bing".into()).style();
		assert_eq!(bing.legend, "Bing");
		assert_eq!(bing.color, FALLBACK_COLOR);
		assert_eq!(PriorityLevel::P0.style().legend, "P0 critical");
	}

	#[test]
	fn citation_colour_override_wins() {
		let mut node = Node::citation("x", "Bing", Platform::Other("Bing".into()));
		node.attributes = NodeAttributes::Citation {
			platform: Platform::Other("Bing".into()),
			color: Some("#008373".into()),
		};
		assert_eq!(to_shape(&node, &GraphConfig::default()).fill, "#008373");
	}

	#[test]
	fn prompt_size_scales_with_score() {
		let config = GraphConfig::default();
		let big = to_shape(&Node::prompt("a", "a", PriorityLevel::P0, 150.0), &config);
		let small = to_shape(&Node::prompt("b", "b", PriorityLevel::P1, 80.0), &config);
		assert_eq!(big.size, 150.0 / config.score_divisor);
		assert_eq!(small.size, 80.0 / config.score_divisor);

		let content = to_shape(&draft_content(), &config);
		assert_eq!(content.size, config.content_size);
	}

	#[test]
	fn long_labels_are_truncated() {
		let long = "abcdefghijklmnopqrstuvwxyz0123";
		assert_eq!(long.len(), 30);
		let label = truncate_label(long, 20);
		assert_eq!(label.len(), 23);
		assert_eq!(label, "abcdefghijklmnopqrst...");

		assert_eq!(truncate_label("short name", 20), "short name");
		let exact = "exactly twenty chars";
		assert_eq!(truncate_label(exact, 20), exact);
	}

	#[test]
	fn truncation_respects_char_boundaries() {
		let label = truncate_label("überlange Überschrift für KI-Suche", 20);
		assert_eq!(label.chars().count(), 23);
	}

	#[test]
	fn tooltip_keeps_full_name() {
		let name = "how to choose a customer data platform";
		let shape = to_shape(
			&Node::prompt("p", name, PriorityLevel::P2, 40.0),
			&GraphConfig::default(),
		);
		assert_eq!(shape.tooltip, name);
		assert!(shape.label.ends_with("..."));
	}

	#[test]
	fn segments_skip_unpositioned_endpoints() {
		let edges = [
			Edge::new("p1", "c1", EdgeKind::PromptToContent),
			Edge::new("p1", "hidden", EdgeKind::PromptToContent),
			Edge::new("c1", "ct1", EdgeKind::ContentToCitation),
		];
		let positions = HashMap::from([
			("p1", Position { x: 1.0, y: 1.0 }),
			("c1", Position { x: 2.0, y: 2.0 }),
			("ct1", Position { x: 3.0, y: 3.0 }),
		]);
		let refs: Vec<&Edge> = edges.iter().collect();
		let segments = edge_segments(&refs, |id| positions.get(id).copied());

		assert_eq!(segments.len(), 2);
		assert_eq!(segments[0].to, Position { x: 2.0, y: 2.0 });
		assert_eq!(segments[1].edge.target, "ct1");
	}

	#[test]
	fn no_edges_no_segments() {
		let positions: HashMap<&str, Position> = HashMap::new();
		let segments = edge_segments(&[], |id| positions.get(id).copied());
		assert!(segments.is_empty());
	}
}
