use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::config::GraphConfig;
use crate::graph::{Graph, Node, NodeShape, Position, to_shape};
use crate::store::LayoutMode;
use crate::view::GraphView;

/// Squared pointer travel (px) below which a press-release counts as a click.
const CLICK_SLOP_SQ: f64 = 9.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub shape: NodeShape,
	pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Interaction and simulation state behind one network canvas.
pub struct NetworkGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	pub layout: LayoutMode,
	pub view: GraphView,
	nodes: Vec<Node>,
	ids: HashMap<String, DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	hit_radius: f64,
}

impl NetworkGraphState {
	pub fn new(
		data: &Graph,
		view: GraphView,
		layout: LayoutMode,
		config: &GraphConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: config.damping_factor,
		});
		let mut ids = HashMap::new();
		let mut edges = Vec::new();
		let centre = Position {
			x: width / 2.0,
			y: height / 2.0,
		};

		for node in data.nodes() {
			let pos = view.positions.get(&node.id).copied().unwrap_or(centre);
			let shape = view
				.shapes
				.get(&node.id)
				.cloned()
				.unwrap_or_else(|| to_shape(node, config));
			let idx = graph.add_node(NodeData {
				x: pos.x as f32,
				y: pos.y as f32,
				mass: 10.0,
				is_anchor: layout == LayoutMode::Layered,
				user_data: NodeInfo {
					id: node.id.clone(),
					shape,
					visible: view.is_visible(&node.id),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for edge in data.edges() {
			if let (Some(&src), Some(&tgt)) = (ids.get(&edge.source), ids.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			layout,
			view,
			nodes: data.nodes().to_vec(),
			ids,
			edges,
			hit_radius: config.hit_radius,
		}
	}

	/// Pushes a freshly derived view into the simulation. Layered mode pins
	/// every node to its column slot; switching to force mode releases them.
	pub fn apply_view(&mut self, view: GraphView, layout: LayoutMode) {
		let released = self.layout == LayoutMode::Layered && layout == LayoutMode::Force;
		self.graph.visit_nodes_mut(|node| {
			let info = &mut node.data.user_data;
			info.visible = view.is_visible(&info.id);
			if let Some(shape) = view.shapes.get(&info.id) {
				info.shape = shape.clone();
			}
			match layout {
				LayoutMode::Layered => {
					if let Some(pos) = view.positions.get(&info.id) {
						node.data.x = pos.x as f32;
						node.data.y = pos.y as f32;
					}
					node.data.is_anchor = true;
				}
				LayoutMode::Force if released => node.data.is_anchor = false,
				LayoutMode::Force => {}
			}
		});
		if !self.hover.node.is_some_and(|idx| self.is_visible(idx)) {
			self.set_hover(None);
		}
		self.layout = layout;
		self.view = view;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if !info.visible {
				return;
			}
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// graph-space radius, scales with zoom like the shapes
			if (dx * dx + dy * dy).sqrt() < info.shape.size + self.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// The source node behind a canvas index.
	pub fn node(&self, idx: DefaultNodeIdx) -> Option<&Node> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		let id = id?;
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn is_visible(&self, idx: DefaultNodeIdx) -> bool {
		let mut visible = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				visible = node.data.user_data.visible;
			}
		});
		visible
	}

	pub fn start_drag(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag = DragState {
			active: true,
			moved: false,
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			..DragState::default()
		};
		let drag = &mut self.drag;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				drag.node_start_x = node.x();
				drag.node_start_y = node.y();
			}
		});
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (sx, sy) = (x - self.drag.start_x, y - self.drag.start_y);
		if sx * sx + sy * sy > CLICK_SLOP_SQ {
			self.drag.moved = true;
		}
		if !self.drag.moved {
			return;
		}
		let (nx, ny) = (
			self.drag.node_start_x + (sx / self.transform.k) as f32,
			self.drag.node_start_y + (sy / self.transform.k) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Ends a drag. Returns the node when the gesture was a click.
	pub fn end_drag(&mut self) -> Option<DefaultNodeIdx> {
		let clicked = self.drag.node_idx.filter(|_| self.drag.active && !self.drag.moved);
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the old highlight around so it can fade out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		if self.layout == LayoutMode::Force {
			self.graph.update(dt);
		}
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Current simulated positions of the visible nodes, keyed by node id.
	pub fn live_positions(&self) -> HashMap<String, Position> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if info.visible {
				positions.insert(
					info.id.clone(),
					Position {
						x: node.x() as f64,
						y: node.y() as f64,
					},
				);
			}
		});
		positions
	}
}
