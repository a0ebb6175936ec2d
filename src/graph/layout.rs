use std::collections::{BTreeMap, HashMap};

use super::types::{Layer, Node};

/// Column centres as fractions of the canvas width, prompts first.
pub const DEFAULT_COLUMNS: [f64; 3] = [0.15, 0.5, 0.85];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Places every node in its layer's column, spreading each layer evenly down
/// the canvas in input order. Empty layers contribute nothing.
pub fn assign_positions(
	nodes_by_layer: &BTreeMap<Layer, Vec<&Node>>,
	width: f64,
	height: f64,
	columns: [f64; 3],
) -> HashMap<String, Position> {
	let mut positions = HashMap::new();
	for (layer, nodes) in nodes_by_layer {
		let x = width * columns[layer.column()];
		let step = height / (nodes.len() + 1) as f64;
		for (i, node) in nodes.iter().enumerate() {
			positions.insert(
				node.id.clone(),
				Position {
					x,
					y: step * (i + 1) as f64,
				},
			);
		}
	}
	positions
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::graph::types::{Platform, PriorityLevel, PublishStatus};

	fn node(layer: Layer, i: usize) -> Node {
		let id = format!("{layer:?}-{i}");
		match layer {
			Layer::Prompt => Node::prompt(&id, &id, PriorityLevel::P1, 50.0),
			Layer::Content => Node::content(&id, &id, "Blog", PublishStatus::Draft),
			Layer::Citation => Node::citation(&id, &id, Platform::Reddit),
		}
	}

	fn layered(counts: [usize; 3]) -> Vec<Node> {
		Layer::ALL
			.iter()
			.zip(counts)
			.flat_map(|(&layer, n)| (0..n).map(move |i| node(layer, i)))
			.collect()
	}

	fn group(nodes: &[Node]) -> BTreeMap<Layer, Vec<&Node>> {
		let mut map: BTreeMap<Layer, Vec<&Node>> = BTreeMap::new();
		for n in nodes {
			map.entry(n.layer()).or_default().push(n);
		}
		map
	}

	#[test]
	fn spreads_rows_evenly() {
		let nodes = layered([3, 1, 0]);
		let pos = assign_positions(&group(&nodes), 1000.0, 400.0, DEFAULT_COLUMNS);

		assert_eq!(pos.len(), 4);
		assert_eq!(pos["Prompt-0"], Position { x: 150.0, y: 100.0 });
		assert_eq!(pos["Prompt-1"], Position { x: 150.0, y: 200.0 });
		assert_eq!(pos["Prompt-2"], Position { x: 150.0, y: 300.0 });
		assert_eq!(pos["Content-0"], Position { x: 500.0, y: 200.0 });
	}

	#[test]
	fn empty_input_yields_nothing() {
		let positions = assign_positions(&BTreeMap::new(), 800.0, 600.0, DEFAULT_COLUMNS);
		assert!(positions.is_empty());
	}

	proptest! {
		#[test]
		fn x_depends_only_on_layer(
			counts in prop::array::uniform3(0usize..12),
			width in 100.0f64..2000.0,
			height in 100.0f64..2000.0,
		) {
			let nodes = layered(counts);
			let pos = assign_positions(&group(&nodes), width, height, DEFAULT_COLUMNS);
			prop_assert_eq!(pos.len(), nodes.len());
			for n in &nodes {
				prop_assert_eq!(pos[&n.id].x, width * DEFAULT_COLUMNS[n.layer().column()]);
			}
		}

		#[test]
		fn rows_increase_within_layer(
			counts in prop::array::uniform3(1usize..12),
			height in 100.0f64..2000.0,
		) {
			let nodes = layered(counts);
			let groups = group(&nodes);
			let pos = assign_positions(&groups, 800.0, height, DEFAULT_COLUMNS);
			for members in groups.values() {
				let ys: Vec<f64> = members.iter().map(|n| pos[&n.id].y).collect();
				let step = height / (ys.len() + 1) as f64;
				prop_assert!(ys.windows(2).all(|w| w[0] < w[1]));
				prop_assert!(ys.iter().all(|&y| y > 0.0 && y < height));
				for (i, y) in ys.iter().enumerate() {
					prop_assert!((y - step * (i + 1) as f64).abs() < 1e-9);
				}
			}
		}

		#[test]
		fn same_input_same_output(counts in prop::array::uniform3(0usize..8)) {
			let nodes = layered(counts);
			let groups = group(&nodes);
			prop_assert_eq!(
				assign_positions(&groups, 640.0, 480.0, DEFAULT_COLUMNS),
				assign_positions(&groups, 640.0, 480.0, DEFAULT_COLUMNS)
			);
		}
	}
}
