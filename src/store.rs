//! Application state and the reducer that applies UI actions to it.

use std::collections::BTreeSet;

use leptos::prelude::*;
use log::debug;

use crate::graph::{Graph, Node, Platform, PriorityLevel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
	/// Fixed columns, one per layer.
	#[default]
	Layered,
	/// Free force-directed layout.
	Force,
}

/// Which nodes are shown. Empty sets mean no restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphFilters {
	pub hidden_priorities: BTreeSet<PriorityLevel>,
	pub hidden_platforms: BTreeSet<Platform>,
}

impl GraphFilters {
	pub fn shows(&self, node: &Node) -> bool {
		if let Some(p) = node.priority() {
			return !self.hidden_priorities.contains(&p);
		}
		if let Some(p) = node.platform() {
			return !self.hidden_platforms.contains(p);
		}
		true
	}

	pub fn is_empty(&self) -> bool {
		self.hidden_priorities.is_empty() && self.hidden_platforms.is_empty()
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
	pub focus: Option<String>,
	pub show_all: bool,
	pub layout: LayoutMode,
	pub filters: GraphFilters,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
	/// Focus a node; selecting the focused node again clears the focus.
	Select(String),
	ClearFocus,
	SetShowAll(bool),
	SetLayout(LayoutMode),
	TogglePriority(PriorityLevel),
	TogglePlatform(Platform),
	ResetFilters,
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
	if !set.remove(&value) {
		set.insert(value);
	}
}

/// Applies `action`. The graph is needed to drop a focus that a filter hides.
pub fn reduce(mut state: AppState, action: Action, graph: &Graph) -> AppState {
	match action {
		Action::Select(id) => {
			state.focus = if state.focus.as_deref() == Some(id.as_str()) {
				None
			} else {
				Some(id)
			};
		}
		Action::ClearFocus => state.focus = None,
		Action::SetShowAll(on) => state.show_all = on,
		Action::SetLayout(mode) => state.layout = mode,
		Action::TogglePriority(p) => toggle(&mut state.filters.hidden_priorities, p),
		Action::TogglePlatform(p) => toggle(&mut state.filters.hidden_platforms, p),
		Action::ResetFilters => state.filters = GraphFilters::default(),
	}

	let focus_hidden = state
		.focus
		.as_deref()
		.and_then(|id| graph.node(id))
		.is_some_and(|node| !state.filters.shows(node));
	if focus_hidden {
		state.focus = None;
	}
	state
}

/// Reactive handle to the app state, shared through context.
#[derive(Clone, Copy)]
pub struct Store {
	pub state: RwSignal<AppState>,
	graph: StoredValue<Graph>,
}

impl Store {
	pub fn new(graph: Graph) -> Self {
		Self {
			state: RwSignal::new(AppState::default()),
			graph: StoredValue::new(graph),
		}
	}

	pub fn dispatch(&self, action: Action) {
		debug!("dispatch {:?}", action);
		self.graph.with_value(|graph| {
			self.state.update(|state| {
				*state = reduce(std::mem::take(state), action, graph);
			});
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Edge, EdgeKind, PublishStatus};

	fn graph() -> Graph {
		Graph::new(
			vec![
				Node::prompt("p1", "crm", PriorityLevel::P0, 150.0),
				Node::prompt("p2", "erp", PriorityLevel::P3, 20.0),
				Node::content("c1", "guide", "Blog", PublishStatus::Published),
				Node::citation("yt", "YouTube", Platform::YouTube),
			],
			vec![
				Edge::new("p1", "c1", EdgeKind::PromptToContent),
				Edge::new("c1", "yt", EdgeKind::ContentToCitation),
			],
		)
		.unwrap()
	}

	#[test]
	fn select_toggles_focus() {
		let g = graph();
		let state = reduce(AppState::default(), Action::Select("p1".into()), &g);
		assert_eq!(state.focus.as_deref(), Some("p1"));

		let state = reduce(state, Action::Select("p2".into()), &g);
		assert_eq!(state.focus.as_deref(), Some("p2"));

		let state = reduce(state, Action::Select("p2".into()), &g);
		assert_eq!(state.focus, None);
	}

	#[test]
	fn show_all_is_set() {
		let g = graph();
		let state = reduce(AppState::default(), Action::SetShowAll(true), &g);
		assert!(state.show_all);
		let state = reduce(state, Action::SetShowAll(false), &g);
		assert!(!state.show_all);
	}

	#[test]
	fn hiding_focused_prompt_clears_focus() {
		let g = graph();
		let state = reduce(AppState::default(), Action::Select("p2".into()), &g);
		let state = reduce(state, Action::TogglePriority(PriorityLevel::P3), &g);
		assert_eq!(state.focus, None);
		assert!(state.filters.hidden_priorities.contains(&PriorityLevel::P3));

		let state = reduce(state, Action::TogglePriority(PriorityLevel::P3), &g);
		assert!(state.filters.is_empty());
	}

	#[test]
	fn hiding_other_layer_keeps_focus() {
		let g = graph();
		let state = reduce(AppState::default(), Action::Select("p1".into()), &g);
		let state = reduce(state, Action::TogglePlatform(Platform::YouTube), &g);
		assert_eq!(state.focus.as_deref(), Some("p1"));
		assert!(!state.filters.shows(g.node("yt").unwrap()));
		assert!(state.filters.shows(g.node("c1").unwrap()));

		let state = reduce(state, Action::ResetFilters, &g);
		assert!(state.filters.is_empty());
	}

	#[test]
	fn layout_mode_switches() {
		let g = graph();
		let force = Action::SetLayout(LayoutMode::Force);
		let state = reduce(AppState::default(), force, &g);
		assert_eq!(state.layout, LayoutMode::Force);
	}
}
