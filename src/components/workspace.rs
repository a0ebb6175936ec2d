use std::collections::BTreeSet;

use leptos::prelude::*;
use log::info;

use super::network_graph::NetworkGraphCanvas;
use super::stats_panel::StatsPanel;
use crate::config::{AppConfig, GraphConfig};
use crate::data::{DataSource, load_graph};
use crate::graph::{Graph, Node, Platform};
use crate::store::{Action, LayoutMode, Store};
use crate::view::GraphView;

/// Loads the graph from the configured source and shows it with its panel.
#[component]
pub fn GraphWorkspace(
	#[prop(optional)] layout: LayoutMode,
	#[prop(optional)] config: GraphConfig,
) -> impl IntoView {
	let app_config = use_context::<AppConfig>().unwrap_or_default();
	let graph = LocalResource::new(move || {
		let source = DataSource::from_config(&app_config);
		async move { load_graph(&source).await }
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Could not load the graph"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Suspense fallback=|| view! { <p class="loading">"Loading graph..."</p> }>
				{move || {
					graph
						.get()
						.map(|loaded| {
							loaded
								.map(|g| {
									view! { <Workspace graph=g layout=layout config=config.clone() /> }
								})
						})
				}}
			</Suspense>
		</ErrorBoundary>
	}
}

#[component]
fn Workspace(graph: Graph, layout: LayoutMode, config: GraphConfig) -> impl IntoView {
	let count = graph.nodes().len();
	info!("showing {count} nodes in {layout:?} layout");
	let store = Store::new(graph.clone());
	store.dispatch(Action::SetLayout(layout));
	provide_context(store);

	let platforms: Vec<Platform> = graph
		.nodes()
		.iter()
		.filter_map(Node::platform)
		.cloned()
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect();

	let size = RwSignal::new((800.0, 600.0));
	let stored = StoredValue::new(graph.clone());
	let view_config = config.clone();
	let graph_view = Memo::new(move |_| {
		let (w, h) = size.get();
		store.state.with(|state| {
			stored.with_value(|g| GraphView::compute(g, state, w, h, &view_config))
		})
	});

	let stats = Signal::derive(move || graph_view.with(|v| v.stats));
	let focused = Signal::derive(move || {
		let focus = store.state.with(|s| s.focus.clone())?;
		stored.with_value(|g| g.node(&focus).cloned())
	});
	let layout = Signal::derive(move || store.state.with(|s| s.layout));
	let on_select = Callback::new(move |node: Node| store.dispatch(Action::Select(node.id)));

	view! {
		<div class="graph-workspace">
			<div class="graph-stage">
				<NetworkGraphCanvas
					graph=graph
					view=graph_view
					layout=layout
					size=size
					on_select=on_select
					config=config
				/>
			</div>
			<StatsPanel store=store stats=stats focused=focused platforms=platforms />
		</div>
	}
}
