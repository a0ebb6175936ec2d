use leptos::prelude::*;

use crate::components::workspace::GraphWorkspace;
use crate::store::LayoutMode;

/// Prompts, contents and citations in three fixed columns.
#[component]
pub fn Network() -> impl IntoView {
	view! {
		<div class="page network-page">
			<header class="graph-overlay">
				<h1>"Prompt → Content → Citation"</h1>
				<p class="subtitle">
					"Click a prompt to follow it to its content and the platforms citing it. Scroll to zoom, drag the background to pan."
				</p>
			</header>
			<GraphWorkspace layout=LayoutMode::Layered />
		</div>
	}
}
