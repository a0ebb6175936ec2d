use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column a node belongs to. Ordered left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
	Prompt,
	Content,
	Citation,
}

impl Layer {
	pub const ALL: [Self; 3] = [Self::Prompt, Self::Content, Self::Citation];

	/// Column index, 0 for prompts through 2 for citations.
	pub fn column(self) -> usize {
		match self {
			Self::Prompt => 0,
			Self::Content => 1,
			Self::Citation => 2,
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Self::Prompt => "Prompts",
			Self::Content => "Contents",
			Self::Citation => "Citations",
		}
	}
}

/// Priority tier of a prompt. P0 is the most urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
	P0,
	P1,
	P2,
	P3,
}

impl PriorityLevel {
	pub const ALL: [Self; 4] = [Self::P0, Self::P1, Self::P2, Self::P3];

	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_ascii_uppercase().as_str() {
			"P0" => Some(Self::P0),
			"P1" => Some(Self::P1),
			"P2" => Some(Self::P2),
			"P3" => Some(Self::P3),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PublishStatus {
	Published,
	Draft,
	Planned,
}

impl PublishStatus {
	/// Accepts the spellings the content API uses (`published`, `DRAFT`, `in_progress`, ...).
	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
			"published" | "live" => Some(Self::Published),
			"draft" | "in_progress" | "review" | "in_review" => Some(Self::Draft),
			"planned" | "scheduled" | "idea" => Some(Self::Planned),
			_ => None,
		}
	}
}

/// AI platform (or community site) a citation was observed on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
	ChatGpt,
	Perplexity,
	Claude,
	Gemini,
	GoogleAiOverview,
	YouTube,
	Reddit,
	Other(String),
}

impl Platform {
	pub fn parse(s: &str) -> Self {
		let key: String = s
			.chars()
			.filter(|c| c.is_ascii_alphanumeric())
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match key.as_str() {
			"chatgpt" | "openai" => Self::ChatGpt,
			"perplexity" => Self::Perplexity,
			"claude" => Self::Claude,
			"gemini" => Self::Gemini,
			"googleaioverview" | "aioverview" | "googleaio" => Self::GoogleAiOverview,
			"youtube" => Self::YouTube,
			"reddit" => Self::Reddit,
			_ => Self::Other(s.trim().to_string()),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::ChatGpt => "ChatGPT",
			Self::Perplexity => "Perplexity",
			Self::Claude => "Claude",
			Self::Gemini => "Gemini",
			Self::GoogleAiOverview => "Google AI Overview",
			Self::YouTube => "YouTube",
			Self::Reddit => "Reddit",
			Self::Other(name) => name,
		}
	}

	/// Stable lowercase identifier, used to build citation node ids.
	pub fn slug(&self) -> String {
		self.name()
			.chars()
			.filter(|c| c.is_ascii_alphanumeric())
			.map(|c| c.to_ascii_lowercase())
			.collect()
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// How strongly a platform cited a piece of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CitationStrength {
	Mentioned = 1,
	Referenced = 2,
	Direct = 3,
}

impl CitationStrength {
	pub fn from_ordinal(n: u8) -> Option<Self> {
		match n {
			1 => Some(Self::Mentioned),
			2 => Some(Self::Referenced),
			3 => Some(Self::Direct),
			_ => None,
		}
	}
}

/// Layer-specific payload of a node. The variant fixes the node's layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeAttributes {
	Prompt {
		priority: PriorityLevel,
		score: f64,
		covered: Option<bool>,
	},
	Content {
		category: String,
		status: PublishStatus,
	},
	Citation {
		platform: Platform,
		color: Option<String>,
	},
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	pub id: String,
	pub name: String,
	pub attributes: NodeAttributes,
}

impl Node {
	pub fn prompt(id: &str, name: &str, priority: PriorityLevel, score: f64) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			attributes: NodeAttributes::Prompt {
				priority,
				score,
				covered: None,
			},
		}
	}

	pub fn content(id: &str, name: &str, category: &str, status: PublishStatus) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			attributes: NodeAttributes::Content {
				category: category.into(),
				status,
			},
		}
	}

	pub fn citation(id: &str, name: &str, platform: Platform) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			attributes: NodeAttributes::Citation {
				platform,
				color: None,
			},
		}
	}

	pub fn layer(&self) -> Layer {
		match self.attributes {
			NodeAttributes::Prompt { .. } => Layer::Prompt,
			NodeAttributes::Content { .. } => Layer::Content,
			NodeAttributes::Citation { .. } => Layer::Citation,
		}
	}

	pub fn priority(&self) -> Option<PriorityLevel> {
		match self.attributes {
			NodeAttributes::Prompt { priority, .. } => Some(priority),
			_ => None,
		}
	}

	pub fn platform(&self) -> Option<&Platform> {
		match &self.attributes {
			NodeAttributes::Citation { platform, .. } => Some(platform),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
	PromptToContent,
	ContentToCitation,
}

impl EdgeKind {
	/// Layers the source and target of this kind of edge must sit in.
	pub fn endpoints(self) -> (Layer, Layer) {
		match self {
			Self::PromptToContent => (Layer::Prompt, Layer::Content),
			Self::ContentToCitation => (Layer::Content, Layer::Citation),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub kind: EdgeKind,
}

impl Edge {
	pub fn new(source: &str, target: &str, kind: EdgeKind) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind,
		}
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
	#[error("duplicate node id: '{id}'")]
	DuplicateNode { id: String },

	#[error("edge {src} -> {dst} refers to unknown node '{missing}'")]
	UnknownEndpoint {
		src: String,
		dst: String,
		missing: String,
	},

	#[error("edge {src} -> {dst} is {kind:?} but connects {from:?} to {to:?}")]
	LayerMismatch {
		src: String,
		dst: String,
		kind: EdgeKind,
		from: Layer,
		to: Layer,
	},
}

/// The full, immutable node and edge set for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	index: HashMap<String, usize>,
}

impl Graph {
	/// Builds a graph, rejecting duplicate ids and edges whose endpoints are
	/// missing or sit in the wrong layers for their kind.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}

		for edge in &edges {
			let layer_of = |id: &str| {
				index
					.get(id)
					.map(|&i| nodes[i].layer())
					.ok_or_else(|| GraphError::UnknownEndpoint {
						src: edge.source.clone(),
						dst: edge.target.clone(),
						missing: id.to_string(),
					})
			};
			let (from, to) = (layer_of(&edge.source)?, layer_of(&edge.target)?);
			if (from, to) != edge.kind.endpoints() {
				return Err(GraphError::LayerMismatch {
					src: edge.source.clone(),
					dst: edge.target.clone(),
					kind: edge.kind,
					from,
					to,
				});
			}
		}

		Ok(Self {
			nodes,
			edges,
			index,
		})
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// Groups nodes by layer, keeping insertion order within each layer and
	/// dropping nodes rejected by `keep`.
	pub fn nodes_by_layer(&self, keep: impl Fn(&Node) -> bool) -> BTreeMap<Layer, Vec<&Node>> {
		let mut layers: BTreeMap<Layer, Vec<&Node>> = BTreeMap::new();
		for node in self.nodes.iter().filter(|n| keep(n)) {
			layers.entry(node.layer()).or_default().push(node);
		}
		layers
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> (Vec<Node>, Vec<Edge>) {
		(
			vec![
				Node::prompt("p1", "best crm", PriorityLevel::P0, 150.0),
				Node::content("c1", "CRM guide", "Blog", PublishStatus::Published),
				Node::citation("ct1", "YouTube", Platform::YouTube),
			],
			vec![
				Edge::new("p1", "c1", EdgeKind::PromptToContent),
				Edge::new("c1", "ct1", EdgeKind::ContentToCitation),
			],
		)
	}

	#[test]
	fn layer_follows_attributes() {
		let (nodes, _) = sample();
		let layers: Vec<Layer> = nodes.iter().map(Node::layer).collect();
		assert_eq!(layers, Layer::ALL);
	}

	#[test]
	fn builds_valid_graph() {
		let (nodes, edges) = sample();
		let graph = Graph::new(nodes, edges).unwrap();
		assert_eq!(graph.nodes().len(), 3);
		assert_eq!(graph.node("c1").map(Node::layer), Some(Layer::Content));
		assert!(graph.node("nope").is_none());
	}

	#[test]
	fn rejects_duplicate_ids() {
		let (mut nodes, edges) = sample();
		nodes.push(Node::content("c1", "again", "Blog", PublishStatus::Draft));
		assert_eq!(
			Graph::new(nodes, edges),
			Err(GraphError::DuplicateNode { id: "c1".into() })
		);
	}

	#[test]
	fn rejects_unknown_endpoint() {
		let (nodes, mut edges) = sample();
		edges.push(Edge::new("p1", "c9", EdgeKind::PromptToContent));
		let err = Graph::new(nodes, edges).unwrap_err();
		let GraphError::UnknownEndpoint { missing, .. } = err else {
			panic!("expected an unknown endpoint");
		};
		assert_eq!(missing, "c9");
	}

	#[test]
	fn rejects_wrong_layers_for_kind() {
		let (nodes, mut edges) = sample();
		edges.push(Edge::new("p1", "ct1", EdgeKind::PromptToContent));
		let err = Graph::new(nodes, edges).unwrap_err();
		assert!(matches!(
			err,
			GraphError::LayerMismatch {
				from: Layer::Prompt,
				to: Layer::Citation,
				..
			}
		));
	}

	#[test]
	fn nodes_by_layer_keeps_order_and_filters() {
		let graph = Graph::new(
			vec![
				Node::prompt("a", "a", PriorityLevel::P2, 10.0),
				Node::content("x", "x", "Blog", PublishStatus::Draft),
				Node::prompt("b", "b", PriorityLevel::P0, 90.0),
				Node::prompt("c", "c", PriorityLevel::P3, 5.0),
			],
			vec![],
		)
		.unwrap();

		let all = graph.nodes_by_layer(|_| true);
		let prompts: Vec<&str> = all[&Layer::Prompt].iter().map(|n| n.id.as_str()).collect();
		assert_eq!(prompts, ["a", "b", "c"]);
		assert!(!all.contains_key(&Layer::Citation));

		let urgent = graph.nodes_by_layer(|n| n.priority() != Some(PriorityLevel::P3));
		assert_eq!(urgent[&Layer::Prompt].len(), 2);
	}

	#[test]
	fn parses_wire_spellings() {
		assert_eq!(PriorityLevel::parse(" p1 "), Some(PriorityLevel::P1));
		assert_eq!(PriorityLevel::parse("P4"), None);
		let status = PublishStatus::parse("IN-PROGRESS");
		assert_eq!(status, Some(PublishStatus::Draft));
		let overview = Platform::parse("Google AI Overview");
		assert_eq!(overview, Platform::GoogleAiOverview);
		assert_eq!(Platform::parse("Bing"), Platform::Other("Bing".into()));
		assert_eq!(Platform::YouTube.slug(), "youtube");
		let strength = CitationStrength::from_ordinal(3);
		assert_eq!(strength, Some(CitationStrength::Direct));
		assert_eq!(CitationStrength::from_ordinal(0), None);
	}
}
