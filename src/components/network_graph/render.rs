use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::NetworkGraphState;
use crate::graph::{Layer, NodeShape, ShapeKind, edge_segments};
use crate::store::LayoutMode;

const BACKGROUND: &str = "#1a1a2e";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d, columns: [f64; 3]) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	if state.layout == LayoutMode::Layered {
		draw_column_titles(state, ctx, columns);
	}
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
	ctx.restore();
}

fn draw_column_titles(
	state: &NetworkGraphState,
	ctx: &CanvasRenderingContext2d,
	columns: [f64; 3],
) {
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.45)");
	ctx.set_font("bold 13px sans-serif");
	ctx.set_text_align("center");
	for layer in Layer::ALL {
		let x = state.width * columns[layer.column()];
		let _ = ctx.fill_text(layer.title(), x, 24.0);
	}
	ctx.set_text_align("start");
}

fn draw_edges(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	let live = state.live_positions();
	let edges: Vec<_> = state.view.visible_edges.iter().collect();

	for segment in edge_segments(&edges, |id| live.get(id).copied()) {
		let (x1, y1, x2, y2) = (segment.from.x, segment.from.y, segment.to.x, segment.to.y);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let (src, tgt) = (
			state.index_of(&segment.edge.source),
			state.index_of(&segment.edge.target),
		);
		let is_highlighted = src
			.zip(tgt)
			.is_some_and(|(a, b)| state.is_highlighted(a) && state.is_highlighted(b));
		let src_size = size_of(state, &segment.edge.source);
		let tgt_size = size_of(state, &segment.edge.target);

		// t=0: every edge at base alpha; t=1: highlighted edges bright, the rest dim
		let (edge_alpha, arrow_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, 0.8 + 0.1 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, 0.8 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {})", edge_alpha));
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * src_size, y1 + uy * src_size);
		ctx.line_to(
			x2 - ux * (tgt_size + arrow_size),
			y2 - uy * (tgt_size + arrow_size),
		);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!("rgba(100, 180, 255, {})", arrow_alpha));
		let (tip_x, tip_y) = (x2 - ux * tgt_size, y2 - uy * tgt_size);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn size_of(state: &NetworkGraphState, id: &str) -> f64 {
	state.view.shapes.get(id).map(|s| s.size).unwrap_or(0.0)
}

fn trace_shape(ctx: &CanvasRenderingContext2d, kind: ShapeKind, x: f64, y: f64, size: f64) {
	ctx.begin_path();
	match kind {
		ShapeKind::Circle => {
			let _ = ctx.arc(x, y, size, 0.0, 2.0 * PI);
		}
		ShapeKind::Rect => ctx.rect(x - size, y - size * 0.75, size * 2.0, size * 1.5),
		ShapeKind::Triangle => {
			ctx.move_to(x, y - size);
			ctx.line_to(x + size * 0.866, y + size * 0.5);
			ctx.line_to(x - size * 0.866, y + size * 0.5);
			ctx.close_path();
		}
	}
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &NodeShape, x: f64, y: f64, size: f64) {
	trace_shape(ctx, shape.kind, x, y, size);
	ctx.set_fill_style_str(&shape.fill);
	ctx.fill();
}

fn draw_label(
	ctx: &CanvasRenderingContext2d,
	label: &str,
	x: f64,
	y: f64,
	size: f64,
	k: f64,
	alpha: f64,
) {
	ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha));
	ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
	let _ = ctx.fill_text(label, x + size + 3.0, y + 3.0);
}

fn draw_nodes(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	let focus = state.view.focus.as_deref().and_then(|id| state.index_of(id));

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		if !info.visible || (has_highlight && state.is_highlighted(idx)) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, size) = if has_highlight {
			(1.0 - 0.7 * t, info.shape.size * (1.0 - 0.15 * t))
		} else {
			(1.0, info.shape.size)
		};

		ctx.set_global_alpha(alpha);
		draw_shape(ctx, &info.shape, x, y, size);
		ctx.set_global_alpha(1.0);

		if focus == Some(idx) {
			trace_shape(ctx, info.shape.kind, x, y, size + 3.0 / k);
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}
		draw_label(ctx, &info.shape.label, x, y, size, k, alpha * 0.8);
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		if !info.visible || !state.is_highlighted(idx) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let base = info.shape.size;
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let (size, glow_radius) = if is_hovered {
			(base * (1.0 + 0.35 * t), base * (1.8 + 1.2 * t))
		} else if is_neighbor {
			(base * (1.0 + 0.2 * t), base * (1.4 + 0.6 * t))
		} else {
			(base, 0.0)
		};

		if glow_radius > 0.0 && t > 0.01 {
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, size * 0.3, x, y, glow_radius) {
				let alpha = if is_hovered { 0.35 * t } else { 0.2 * t };
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha));
				let _ = gradient
					.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		draw_shape(ctx, &info.shape, x, y, size);

		if (is_hovered && t > 0.01) || focus == Some(idx) {
			trace_shape(ctx, info.shape.kind, x, y, size + 2.0 / k);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t.max(0.5)));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		draw_label(ctx, &info.shape.label, x, y, size, k, 1.0);
	});
}

/// Full node name next to the hovered node.
fn draw_tooltip(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(hovered) = state.hover.node else {
		return;
	};
	let k = state.transform.k;
	state.graph.visit_nodes(|node| {
		if node.index() != hovered {
			return;
		}
		let shape = &node.data.user_data.shape;
		let (x, y) = (node.x() as f64, node.y() as f64 - shape.size - 10.0 / k);
		let font = 11.0 / k.max(0.5);
		ctx.set_font(&format!("{}px sans-serif", font));
		let width = ctx
			.measure_text(&shape.tooltip)
			.map(|m| m.width())
			.unwrap_or(shape.tooltip.len() as f64 * font * 0.6);
		let pad = 4.0 / k;

		ctx.set_fill_style_str("rgba(0, 0, 0, 0.75)");
		let (left, top) = (x - width / 2.0 - pad, y - font - pad);
		ctx.fill_rect(left, top, width + 2.0 * pad, font + 2.0 * pad);
		ctx.set_fill_style_str("white");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&shape.tooltip, x, y);
		ctx.set_text_align("start");
	});
}
