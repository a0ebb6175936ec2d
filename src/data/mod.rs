//! Sources of graph data and assembly of a `Graph` from their records.

mod assemble;
mod fixture;
mod http;
mod records;

use thiserror::Error;

use crate::config::AppConfig;
use crate::graph::GraphError;

pub use assemble::load_graph;
pub use fixture::FixtureSource;
pub use http::HttpSource;
use records::{CitationRecord, ContentItem, RoadmapItem};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
	#[error("request to {url} failed: {reason}")]
	Request { url: String, reason: String },

	#[error("{url} answered HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("malformed response from {url}: {reason}")]
	Malformed { url: String, reason: String },

	#[error("invalid record '{id}': {reason}")]
	InvalidRecord { id: String, reason: String },

	#[error(transparent)]
	Graph(#[from] GraphError),
}

/// Supplies the three collections a graph is assembled from.
#[allow(async_fn_in_trait)]
pub trait GraphDataSource {
	async fn fetch_prompts(&self) -> Result<Vec<RoadmapItem>, DataError>;
	async fn fetch_contents(&self) -> Result<Vec<ContentItem>, DataError>;
	async fn fetch_citations(&self) -> Result<Vec<CitationRecord>, DataError>;
}

/// The source selected by configuration.
#[derive(Clone, Debug)]
pub enum DataSource {
	Fixture(FixtureSource),
	Http(HttpSource),
}

impl DataSource {
	pub fn from_config(config: &AppConfig) -> Self {
		match &config.api_base {
			Some(base) => Self::Http(HttpSource::new(base, config.page_size)),
			None => Self::Fixture(FixtureSource),
		}
	}
}

impl GraphDataSource for DataSource {
	async fn fetch_prompts(&self) -> Result<Vec<RoadmapItem>, DataError> {
		match self {
			Self::Fixture(s) => s.fetch_prompts().await,
			Self::Http(s) => s.fetch_prompts().await,
		}
	}

	async fn fetch_contents(&self) -> Result<Vec<ContentItem>, DataError> {
		match self {
			Self::Fixture(s) => s.fetch_contents().await,
			Self::Http(s) => s.fetch_contents().await,
		}
	}

	async fn fetch_citations(&self) -> Result<Vec<CitationRecord>, DataError> {
		match self {
			Self::Fixture(s) => s.fetch_citations().await,
			Self::Http(s) => s.fetch_citations().await,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_picks_source() {
		assert!(matches!(
			DataSource::from_config(&AppConfig::default()),
			DataSource::Fixture(_)
		));

		let config = AppConfig {
			api_base: Some("http://localhost:3000".into()),
			..AppConfig::default()
		};
		let source = DataSource::from_config(&config);
		assert!(matches!(source, DataSource::Http(_)));
	}

	#[test]
	fn graph_errors_convert() {
		let err: DataError = GraphError::DuplicateNode { id: "r1".into() }.into();
		assert_eq!(err.to_string(), "duplicate node id: 'r1'");
	}
}
