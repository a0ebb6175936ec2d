use std::future::Future;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::records::{CitationRecord, ContentItem, Page, RoadmapItem};
use super::{DataError, GraphDataSource};

/// Reads the collections from the dashboard's REST API.
#[derive(Clone, Debug)]
pub struct HttpSource {
	client: reqwest::Client,
	base: String,
	page_size: u32,
}

impl HttpSource {
	pub fn new(base: &str, page_size: u32) -> Self {
		Self {
			client: reqwest::Client::new(),
			base: base.trim_end_matches('/').to_string(),
			page_size: page_size.max(1),
		}
	}

	async fn fetch_page<T: DeserializeOwned>(
		&self,
		url: &str,
		page: u32,
	) -> Result<Page<T>, DataError> {
		debug!("GET {url} page {page}");
		let response = self
			.client
			.get(url)
			.query(&[("page", page), ("limit", self.page_size)])
			.send()
			.await
			.map_err(|err| DataError::Request {
				url: url.to_string(),
				reason: err.to_string(),
			})?;

		let status = response.status();
		if !status.is_success() {
			warn!("GET {url} returned {status}");
			return Err(DataError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(|err| DataError::Request {
			url: url.to_string(),
			reason: err.to_string(),
		})?;
		serde_json::from_str(&body).map_err(|err| DataError::Malformed {
			url: url.to_string(),
			reason: err.to_string(),
		})
	}

	async fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, DataError> {
		let url = format!("{}/{}", self.base, path);
		let url = url.as_str();
		collect_pages(move |page| self.fetch_page(url, page)).await
	}
}

/// Requests pages from 1 upwards until `total` items arrived or a page is empty.
pub(super) async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, DataError>
where
	F: FnMut(u32) -> Fut,
	Fut: Future<Output = Result<Page<T>, DataError>>,
{
	let mut items = Vec::new();
	let mut page = 1;
	loop {
		let Page { data, total } = fetch_page(page).await?;
		let exhausted = data.is_empty();
		items.extend(data);
		if exhausted || items.len() >= total {
			return Ok(items);
		}
		page += 1;
	}
}

impl GraphDataSource for HttpSource {
	async fn fetch_prompts(&self) -> Result<Vec<RoadmapItem>, DataError> {
		self.fetch_all("roadmap").await
	}

	async fn fetch_contents(&self) -> Result<Vec<ContentItem>, DataError> {
		self.fetch_all("content").await
	}

	async fn fetch_citations(&self) -> Result<Vec<CitationRecord>, DataError> {
		self.fetch_all("citations").await
	}
}
