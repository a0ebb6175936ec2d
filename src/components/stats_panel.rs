use leptos::prelude::*;

use crate::graph::{
	Node, NodeAttributes, Platform, PriorityLevel, PublishStatus, SelectionStats, Styled,
};
use crate::store::{Action, LayoutMode, Store};

/// One-line description of the focused node under its name.
fn describe(node: &Node) -> String {
	match &node.attributes {
		NodeAttributes::Prompt {
			priority,
			score,
			covered,
		} => {
			let coverage = match covered {
				Some(true) => ", covered",
				Some(false) => ", not covered",
				None => "",
			};
			let legend = priority.style().legend;
			format!("{legend} prompt, GEO score {score:.1}{coverage}")
		}
		NodeAttributes::Content { category, status } => {
			format!("{category} content, {}", status.style().legend)
		}
		NodeAttributes::Citation { platform, .. } => format!("Cited on {platform}"),
	}
}

/// Selection summary plus the show-all, layout and filter controls.
#[component]
pub fn StatsPanel(
	store: Store,
	#[prop(into)] stats: Signal<SelectionStats>,
	#[prop(into)] focused: Signal<Option<Node>>,
	/// Platforms present in the graph, offered as filters.
	platforms: Vec<Platform>,
) -> impl IntoView {
	let state = store.state;

	let priority_filters = PriorityLevel::ALL
		.into_iter()
		.map(|p| {
			let style = p.style();
			view! {
				<label class="filter">
					<input
						type="checkbox"
						prop:checked=move || !state.with(|s| s.filters.hidden_priorities.contains(&p))
						on:change=move |_| store.dispatch(Action::TogglePriority(p))
					/>
					<span class="swatch circle" style=format!("background: {}", style.color)></span>
					{style.legend}
				</label>
			}
		})
		.collect_view();

	let platform_filters = platforms
		.into_iter()
		.map(|platform| {
			let style = platform.style();
			let checked = platform.clone();
			view! {
				<label class="filter">
					<input
						type="checkbox"
						prop:checked=move || !state.with(|s| s.filters.hidden_platforms.contains(&checked))
						on:change=move |_| store.dispatch(Action::TogglePlatform(platform.clone()))
					/>
					<span class="swatch triangle" style=format!("color: {}", style.color)></span>
					{style.legend}
				</label>
			}
		})
		.collect_view();

	let status_legend = [PublishStatus::Published, PublishStatus::Draft, PublishStatus::Planned]
		.into_iter()
		.map(|s| {
			let style = s.style();
			view! {
				<li>
					<span class="swatch rect" style=format!("background: {}", style.color)></span>
					{style.legend}
				</li>
			}
		})
		.collect_view();

	view! {
		<aside class="stats-panel">
			<section class="selection">
				<Show
					when=move || focused.with(Option::is_some)
					fallback=|| view! { <p class="hint">"Click a prompt to trace its content and citations."</p> }
				>
					<h2>{move || focused.with(|n| n.as_ref().map(|n| n.name.clone()))}</h2>
					<p class="detail">{move || focused.with(|n| n.as_ref().map(describe))}</p>
					<dl>
						<dt>"Connected content"</dt>
						<dd>{move || stats.get().content_count}</dd>
						<dt>"Citation platforms"</dt>
						<dd>{move || stats.get().citation_count}</dd>
					</dl>
					<button on:click=move |_| store.dispatch(Action::ClearFocus)>"Clear selection"</button>
				</Show>
			</section>

			<section class="controls">
				<label>
					<input
						type="checkbox"
						prop:checked=move || state.with(|s| s.show_all)
						on:change=move |ev| store.dispatch(Action::SetShowAll(event_target_checked(&ev)))
					/>
					"Show all connections"
				</label>
				<label>
					<input
						type="checkbox"
						prop:checked=move || state.with(|s| s.layout == LayoutMode::Force)
						on:change=move |ev| {
							let mode = if event_target_checked(&ev) {
								LayoutMode::Force
							} else {
								LayoutMode::Layered
							};
							store.dispatch(Action::SetLayout(mode));
						}
					/>
					"Force layout"
				</label>
			</section>

			<section class="filters">
				<h3>"Priority"</h3>
				{priority_filters}
				<h3>"Platforms"</h3>
				{platform_filters}
				<button
					disabled=move || state.with(|s| s.filters.is_empty())
					on:click=move |_| store.dispatch(Action::ResetFilters)
				>
					"Reset filters"
				</button>
			</section>

			<section class="legend">
				<h3>"Content status"</h3>
				<ul>{status_legend}</ul>
			</section>
		</aside>
	}
}
