//! Force-directed layout for small star-shaped interaction graphs.
//!
//! Each call to [`LayoutEngine::step`] moves every free node once by half of
//! the net force acting on it: inverse-distance repulsion from every other
//! node, a linear spring toward each neighbor and a constant push away from
//! the canvas walls. Nodes are advanced in place in sequence order, so a
//! node sees the already-updated positions of the nodes before it.

use super::error::LayoutError;
use super::types::{CanvasSize, Graph, Node};

pub const REPULSION: f64 = 100.0;
pub const SPRING: f64 = 0.01;
pub const WALL_MARGIN: f64 = 20.0;
pub const WALL_PUSH: f64 = 5.0;
pub const STEP: f64 = 0.5;
/// Separations below this count as coincident nodes.
pub const MIN_DISTANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
pub struct LayoutEngine {
	size: CanvasSize,
}

impl LayoutEngine {
	pub fn new(size: CanvasSize) -> Self {
		Self { size }
	}

	/// Advances every free node by one tick.
	///
	/// Edges are resolved before anything moves, so a malformed graph is
	/// left untouched.
	pub fn step(&self, graph: &mut Graph) -> Result<(), LayoutError> {
		let edges = graph.resolve_edges()?;
		for i in 0..graph.nodes.len() {
			if graph.nodes[i].fixed {
				continue;
			}
			let (fx, fy) = self.force_on(graph, i, &edges);
			let node = &mut graph.nodes[i];
			node.x += fx * STEP;
			node.y += fy * STEP;
		}
		Ok(())
	}

	/// Net force on the node at `index` given resolved edge indices.
	pub fn force_on(&self, graph: &Graph, index: usize, edges: &[(usize, usize)]) -> (f64, f64) {
		let a = &graph.nodes[index];
		let (mut fx, mut fy) = (0.0, 0.0);

		for (j, b) in graph.nodes.iter().enumerate() {
			if j == index {
				continue;
			}
			let (rx, ry) = repulsion(a, b, index > j);
			fx += rx;
			fy += ry;
		}

		for &(from, to) in edges {
			let other = if from == index {
				to
			} else if to == index {
				from
			} else {
				continue;
			};
			let b = &graph.nodes[other];
			fx += (b.x - a.x) * SPRING;
			fy += (b.y - a.y) * SPRING;
		}

		let (wx, wy) = boundary_force(a.x, a.y, self.size);
		(fx + wx, fy + wy)
	}
}

/// Repulsive force on `a` from `b`, magnitude `REPULSION / dist`.
///
/// Coincident nodes are pushed apart along the x axis: the later node in
/// sequence order toward +x, the earlier one toward -x.
fn repulsion(a: &Node, b: &Node, a_is_later: bool) -> (f64, f64) {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < MIN_DISTANCE {
		let dir = if a_is_later { 1.0 } else { -1.0 };
		return (dir * REPULSION, 0.0);
	}
	let magnitude = REPULSION / dist;
	(dx / dist * magnitude, dy / dist * magnitude)
}

/// Soft-wall term: a constant push back toward the canvas interior.
pub fn boundary_force(x: f64, y: f64, size: CanvasSize) -> (f64, f64) {
	let (mut fx, mut fy) = (0.0, 0.0);
	if x < WALL_MARGIN {
		fx += WALL_PUSH;
	}
	if x > size.width - WALL_MARGIN {
		fx -= WALL_PUSH;
	}
	if y < WALL_MARGIN {
		fy += WALL_PUSH;
	}
	if y > size.height - WALL_MARGIN {
		fy -= WALL_PUSH;
	}
	(fx, fy)
}
