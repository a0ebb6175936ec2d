use leptos::prelude::*;

use crate::components::workspace::GraphWorkspace;
use crate::store::LayoutMode;

/// The same graph, left to the force simulation.
#[component]
pub fn Battlefield() -> impl IntoView {
	view! {
		<div class="page battlefield-page">
			<header class="graph-overlay">
				<h1>"Battlefield Map"</h1>
				<p class="subtitle">"Clusters form around the prompts that share content and platforms. Drag nodes to pin them."</p>
			</header>
			<GraphWorkspace layout=LayoutMode::Force />
		</div>
	}
}
