use log::warn;

use super::types::{Graph, Node};
use crate::components::surface::{Stroke, Surface, TextAlign, TextStyle};

pub const NODE_RADIUS: f64 = 15.0;
pub const LABEL_CHARS: usize = 5;

const EDGE: Stroke = Stroke {
	color: "#95a5a6",
	width: 2.0,
};
const NODE_OUTLINE: Stroke = Stroke {
	color: "#2c3e50",
	width: 2.0,
};
const FOCAL_FILL: &str = "#3498db";
const FREE_FILL: &str = "#e74c3c";
const LABEL: TextStyle = TextStyle {
	font: "bold 10px Arial",
	color: "white",
	align: TextAlign::Center,
};
const TOOLTIP_FILL: &str = "rgba(44, 62, 80, 0.9)";
const TOOLTIP_TEXT: TextStyle = TextStyle {
	font: "12px Arial",
	color: "white",
	align: TextAlign::Left,
};

/// Paints the whole graph, plus a tooltip for `hovered` when given.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, graph: &Graph, hovered: Option<&Node>) {
	surface.clear();
	draw_edges(surface, graph);
	draw_nodes(surface, graph);
	if let Some(node) = hovered {
		draw_tooltip(surface, node);
	}
}

fn draw_edges<S: Surface + ?Sized>(surface: &mut S, graph: &Graph) {
	for edge in &graph.edges {
		let (Some(from), Some(to)) = (graph.node(&edge.from), graph.node(&edge.to)) else {
			warn!("skipping edge {} -> {}: unknown endpoint", edge.from, edge.to);
			continue;
		};
		surface.line((from.x, from.y), (to.x, to.y), &EDGE);
	}
}

fn draw_nodes<S: Surface + ?Sized>(surface: &mut S, graph: &Graph) {
	for node in &graph.nodes {
		let fill = if node.fixed { FOCAL_FILL } else { FREE_FILL };
		surface.circle((node.x, node.y), NODE_RADIUS, fill, Some(&NODE_OUTLINE));
		let label: String = node.id.chars().take(LABEL_CHARS).collect();
		surface.text(&label, (node.x, node.y + 4.0), &LABEL);
	}
}

fn draw_tooltip<S: Surface + ?Sized>(surface: &mut S, node: &Node) {
	let width = node.id.chars().count() as f64 * 6.0 + 10.0;
	surface.rect(node.x + 20.0, node.y - 15.0, width, 20.0, TOOLTIP_FILL);
	surface.text(&node.id, (node.x + 25.0, node.y), &TOOLTIP_TEXT);
}

/// First node, in sequence order, whose circle contains the point.
pub fn hit_test(graph: &Graph, x: f64, y: f64) -> Option<&Node> {
	graph
		.nodes
		.iter()
		.find(|node| node.distance_to(x, y) < NODE_RADIUS)
}
