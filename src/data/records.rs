//! Wire shapes of the roadmap, content and citation collections.

use serde::{Deserialize, Serialize};

use super::DataError;
use crate::graph::{CitationStrength, Node, NodeAttributes, Platform, PriorityLevel, PublishStatus};

/// One page of a collection endpoint. The echoed `page` and `limit` are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
	pub data: Vec<T>,
	pub total: usize,
}

/// A roadmap prompt (`GET /roadmap`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
	pub id: String,
	pub prompt: String,
	pub p_level: String,
	pub enhanced_geo_score: f64,
	#[serde(default)]
	pub covered: Option<bool>,
}

impl RoadmapItem {
	pub fn to_node(&self) -> Result<Node, DataError> {
		let priority = PriorityLevel::parse(&self.p_level).ok_or_else(|| DataError::InvalidRecord {
			id: self.id.clone(),
			reason: format!("unknown P-level '{}'", self.p_level),
		})?;
		Ok(Node {
			id: self.id.clone(),
			name: self.prompt.clone(),
			attributes: NodeAttributes::Prompt {
				priority,
				score: self.enhanced_geo_score,
				covered: self.covered,
			},
		})
	}
}

/// A piece of content (`GET /content`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
	pub id: String,
	pub title: String,
	pub channel: String,
	pub publish_status: String,
	#[serde(default)]
	pub roadmap_id: Option<String>,
}

impl ContentItem {
	pub fn to_node(&self) -> Result<Node, DataError> {
		let status =
			PublishStatus::parse(&self.publish_status).ok_or_else(|| DataError::InvalidRecord {
				id: self.id.clone(),
				reason: format!("unknown publish status '{}'", self.publish_status),
			})?;
		Ok(Node::content(&self.id, &self.title, &self.channel, status))
	}
}

/// One observed citation of a content item on a platform (`GET /citations`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRecord {
	pub id: String,
	pub content_id: String,
	pub platform: String,
	#[serde(default)]
	pub citation_strength: Option<u8>,
}

impl CitationRecord {
	pub fn platform(&self) -> Platform {
		Platform::parse(&self.platform)
	}

	pub fn strength(&self) -> Result<Option<CitationStrength>, DataError> {
		self.citation_strength
			.map(|n| {
				CitationStrength::from_ordinal(n).ok_or_else(|| DataError::InvalidRecord {
					id: self.id.clone(),
					reason: format!("citation strength {n} outside 1..=3"),
				})
			})
			.transpose()
	}
}
