//! Layout, styling and data-source settings.

use serde::Deserialize;

use crate::graph::layout::DEFAULT_COLUMNS;

/// Tunables for layout, node styling and the force simulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
	/// Column centres as fractions of the canvas width.
	pub columns: [f64; 3],
	/// Prompt radius is `score / score_divisor`.
	pub score_divisor: f64,
	pub content_size: f64,
	pub citation_size: f64,
	pub label_max_chars: usize,
	/// Pointer tolerance around a node, in graph space.
	pub hit_radius: f64,
	pub force_charge: f32,
	pub force_spring: f32,
	pub damping_factor: f32,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			columns: DEFAULT_COLUMNS,
			score_divisor: 10.0,
			content_size: 12.0,
			citation_size: 14.0,
			label_max_chars: 20,
			hit_radius: 6.0,
			force_charge: 150.0,
			force_spring: 0.05,
			damping_factor: 0.9,
		}
	}
}

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Where graph data comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
	/// REST API root. `None` serves the bundled sample data.
	pub api_base: Option<String>,
	pub page_size: u32,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base: None,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl AppConfig {
	/// Reads `GEO_API_BASE` and `GEO_API_PAGE_SIZE` as baked in at build time.
	pub fn from_build_env() -> Self {
		Self::from_values(
			option_env!("GEO_API_BASE"),
			option_env!("GEO_API_PAGE_SIZE"),
		)
	}

	fn from_values(api_base: Option<&str>, page_size: Option<&str>) -> Self {
		Self {
			api_base: api_base
				.map(|s| s.trim().trim_end_matches('/').to_string())
				.filter(|s| !s.is_empty()),
			page_size: page_size
				.and_then(|s| s.trim().parse().ok())
				.filter(|&n| n > 0)
				.unwrap_or(DEFAULT_PAGE_SIZE),
		}
	}
}
