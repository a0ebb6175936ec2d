use std::collections::HashSet;

use log::{info, warn};

use super::records::{CitationRecord, ContentItem, RoadmapItem};
use super::{DataError, GraphDataSource};
use crate::graph::{Edge, EdgeKind, Graph, Node, Platform};

/// Id of the citation node standing for `platform`.
pub fn citation_node_id(platform: &Platform) -> String {
	format!("platform:{}", platform.slug())
}

/// Fetches all three collections from `source` and assembles the graph.
pub async fn load_graph<S: GraphDataSource>(source: &S) -> Result<Graph, DataError> {
	let prompts = source.fetch_prompts().await?;
	let contents = source.fetch_contents().await?;
	let citations = source.fetch_citations().await?;
	info!(
		"loaded {} prompts, {} contents, {} citations",
		prompts.len(),
		contents.len(),
		citations.len()
	);
	build_graph(&prompts, &contents, &citations)
}

/// Turns records into nodes and derives edges from their foreign keys.
///
/// Each distinct platform becomes one citation node. Records that fail to
/// parse, and records pointing at a missing parent, are skipped.
pub fn build_graph(
	prompts: &[RoadmapItem],
	contents: &[ContentItem],
	citations: &[CitationRecord],
) -> Result<Graph, DataError> {
	let mut nodes = Vec::with_capacity(prompts.len() + contents.len());
	let mut edges = Vec::new();

	let mut prompt_ids = HashSet::new();
	for item in prompts {
		match item.to_node() {
			Ok(node) => {
				prompt_ids.insert(item.id.as_str());
				nodes.push(node);
			}
			Err(err) => warn!("skipping roadmap item: {err}"),
		}
	}

	let mut content_ids = HashSet::new();
	for item in contents {
		let node = match item.to_node() {
			Ok(node) => node,
			Err(err) => {
				warn!("skipping content item: {err}");
				continue;
			}
		};
		content_ids.insert(item.id.as_str());
		nodes.push(node);

		match item.roadmap_id.as_deref() {
			Some(roadmap_id) if prompt_ids.contains(roadmap_id) => {
				edges.push(Edge::new(roadmap_id, &item.id, EdgeKind::PromptToContent));
			}
			Some(roadmap_id) => {
				let id = &item.id;
				warn!("content {id} refers to unknown roadmap item {roadmap_id}");
			}
			None => {}
		}
	}

	let mut platforms = HashSet::new();
	let mut linked = HashSet::new();
	for record in citations {
		if let Err(err) = record.strength() {
			warn!("skipping citation: {err}");
			continue;
		}
		if !content_ids.contains(record.content_id.as_str()) {
			let (id, content_id) = (&record.id, &record.content_id);
			warn!("citation {id} refers to unknown content {content_id}");
			continue;
		}

		let platform = record.platform();
		let node_id = citation_node_id(&platform);
		if platforms.insert(node_id.clone()) {
			let name = platform.name().to_string();
			nodes.push(Node::citation(&node_id, &name, platform));
		}
		if linked.insert((record.content_id.clone(), node_id.clone())) {
			let kind = EdgeKind::ContentToCitation;
			edges.push(Edge::new(&record.content_id, &node_id, kind));
		}
	}

	let graph = Graph::new(nodes, edges)?;
	info!(
		"assembled graph with {} nodes and {} edges",
		graph.nodes().len(),
		graph.edges().len()
	);
	Ok(graph)
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	use crate::data::FixtureSource;
	use crate::graph::{Layer, compute_stats, visible_edges};

	fn roadmap(id: &str, p_level: &str) -> RoadmapItem {
		RoadmapItem {
			id: id.into(),
			prompt: format!("prompt {id}"),
			p_level: p_level.into(),
			enhanced_geo_score: 50.0,
			covered: None,
		}
	}

	fn content(id: &str, roadmap_id: Option<&str>) -> ContentItem {
		ContentItem {
			id: id.into(),
			title: format!("content {id}"),
			channel: "Blog".into(),
			publish_status: "published".into(),
			roadmap_id: roadmap_id.map(Into::into),
		}
	}

	fn citation(id: &str, content_id: &str, platform: &str) -> CitationRecord {
		CitationRecord {
			id: id.into(),
			content_id: content_id.into(),
			platform: platform.into(),
			citation_strength: Some(1),
		}
	}

	#[test]
	fn platforms_are_shared_nodes() {
		let graph = build_graph(
			&[roadmap("r1", "P0")],
			&[content("c1", Some("r1")), content("c2", Some("r1"))],
			&[
				citation("x1", "c1", "YouTube"),
				citation("x2", "c2", "youtube"),
				citation("x3", "c2", "YouTube"),
			],
		)
		.unwrap();

		let citations: Vec<&Node> = graph
			.nodes()
			.iter()
			.filter(|n| n.layer() == Layer::Citation)
			.collect();
		assert_eq!(citations.len(), 1);
		assert_eq!(citations[0].id, "platform:youtube");
		assert_eq!(citations[0].name, "YouTube");
		assert_eq!(citations[0].platform(), Some(&Platform::YouTube));
		// x3 repeats the c2 -> youtube pair
		assert_eq!(graph.edges().len(), 4);

		let stats = compute_stats(graph.edges(), Some("r1"));
		assert_eq!((stats.content_count, stats.citation_count), (2, 1));
	}

	#[test]
	fn dangling_and_invalid_records_are_skipped() {
		let mut bad_strength = citation("x3", "c1", "Claude");
		bad_strength.citation_strength = Some(9);

		let graph = build_graph(
			&[roadmap("r1", "P1"), roadmap("r2", "P9")],
			&[content("c1", Some("r1")), content("c2", Some("r2")), content("c3", None)],
			&[citation("x1", "c1", "Reddit"), citation("x2", "gone", "Gemini"), bad_strength],
		)
		.unwrap();

		assert!(graph.node("r2").is_none());
		assert!(graph.node("c2").is_some());
		assert!(graph.node("platform:gemini").is_none());
		assert!(graph.node("platform:claude").is_none());
		let pairs: Vec<(&str, &str)> = graph
			.edges()
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		assert_eq!(pairs, [("r1", "c1"), ("c1", "platform:reddit")]);
	}

	#[test]
	fn duplicate_ids_fail() {
		let err = build_graph(&[roadmap("r1", "P0"), roadmap("r1", "P1")], &[], &[]).unwrap_err();
		assert!(matches!(err, DataError::Graph(_)));
	}

	#[test]
	fn fixture_graph_loads() {
		let graph = block_on(load_graph(&FixtureSource)).unwrap();
		let layers = graph.nodes_by_layer(|_| true);
		assert_eq!(layers[&Layer::Prompt].len(), 7);
		assert_eq!(layers[&Layer::Content].len(), 9);
		assert_eq!(layers[&Layer::Citation].len(), 7);

		let visible = visible_edges(graph.edges(), Some("r1"), false);
		assert!(visible.iter().any(|e| e.target == "platform:chatgpt"));
		let sources = ["r1", "c1", "c2"];
		assert!(visible.iter().all(|e| sources.contains(&e.source.as_str())));
	}
}
