use super::records::{CitationRecord, ContentItem, RoadmapItem};
use super::{DataError, GraphDataSource};

/// Bundled sample dataset, used when no API is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureSource;

const PROMPTS: &[(&str, &str, &str, f64, bool)] = &[
	("r1", "best CRM for early-stage startups", "P0", 152.0, true),
	("r2", "how to reduce SaaS churn", "P0", 138.0, true),
	("r3", "HubSpot vs Salesforce for small teams", "P1", 96.0, true),
	("r4", "customer onboarding checklist", "P1", 84.0, false),
	("r5", "what is generative engine optimization", "P2", 61.0, true),
	("r6", "B2B pricing page examples", "P2", 48.0, false),
	("r7", "sales forecasting spreadsheet template", "P3", 27.0, false),
];

const CONTENTS: &[(&str, &str, &str, &str, Option<&str>)] = &[
	("c1", "The 2025 Startup CRM Buyer's Guide", "Blog", "Published", Some("r1")),
	("c2", "CRM setup in 10 minutes", "YouTube", "Published", Some("r1")),
	("c3", "Churn playbook: 12 tactics that work", "Blog", "Published", Some("r2")),
	("c4", "Churn teardown thread", "Reddit", "Draft", Some("r2")),
	("c5", "HubSpot vs Salesforce, honestly compared", "Blog", "Published", Some("r3")),
	("c6", "Onboarding checklist template", "Docs", "Draft", Some("r4")),
	("c7", "GEO explained for marketers", "Blog", "Published", Some("r5")),
	("c8", "Pricing page gallery", "Blog", "Planned", Some("r6")),
	("c9", "Quarterly newsletter", "Email", "Planned", None),
];

const CITATIONS: &[(&str, &str, &str, u8)] = &[
	("x1", "c1", "ChatGPT", 3),
	("x2", "c1", "Perplexity", 2),
	("x3", "c2", "YouTube", 3),
	("x4", "c2", "Google AI Overview", 1),
	("x5", "c3", "ChatGPT", 2),
	("x6", "c3", "Claude", 2),
	("x7", "c4", "Reddit", 1),
	("x8", "c5", "Perplexity", 3),
	("x9", "c5", "Gemini", 1),
	("x10", "c7", "ChatGPT", 3),
	("x11", "c7", "Claude", 3),
	("x12", "c7", "Perplexity", 2),
];

impl FixtureSource {
	pub fn prompts() -> Vec<RoadmapItem> {
		PROMPTS
			.iter()
			.map(|&(id, prompt, p_level, score, covered)| RoadmapItem {
				id: id.into(),
				prompt: prompt.into(),
				p_level: p_level.into(),
				enhanced_geo_score: score,
				covered: Some(covered),
			})
			.collect()
	}

	pub fn contents() -> Vec<ContentItem> {
		CONTENTS
			.iter()
			.map(|&(id, title, channel, status, roadmap_id)| ContentItem {
				id: id.into(),
				title: title.into(),
				channel: channel.into(),
				publish_status: status.into(),
				roadmap_id: roadmap_id.map(Into::into),
			})
			.collect()
	}

	pub fn citations() -> Vec<CitationRecord> {
		CITATIONS
			.iter()
			.map(|&(id, content_id, platform, strength)| CitationRecord {
				id: id.into(),
				content_id: content_id.into(),
				platform: platform.into(),
				citation_strength: Some(strength),
			})
			.collect()
	}
}

impl GraphDataSource for FixtureSource {
	async fn fetch_prompts(&self) -> Result<Vec<RoadmapItem>, DataError> {
		Ok(Self::prompts())
	}

	async fn fetch_contents(&self) -> Result<Vec<ContentItem>, DataError> {
		Ok(Self::contents())
	}

	async fn fetch_citations(&self) -> Result<Vec<CitationRecord>, DataError> {
		Ok(Self::citations())
	}
}
