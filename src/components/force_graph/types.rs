use std::collections::HashSet;

use rand::Rng;

use super::error::LayoutError;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	pub width: f64,
	pub height: f64,
}

impl CanvasSize {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub fixed: bool,
}

impl Node {
	pub fn new(id: impl Into<String>, x: f64, y: f64, fixed: bool) -> Self {
		Self {
			id: id.into(),
			x,
			y,
			fixed,
		}
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: String,
	pub to: String,
}

impl Edge {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// Result of a lookup: the queried entity and the ids related to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkData {
	pub focal: String,
	pub neighbors: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Builds a star around `data.focal`, pinned at the canvas center.
	///
	/// Free nodes are placed uniformly over the canvas. Neighbor ids that
	/// repeat or equal the focal id are dropped so ids stay unique.
	pub fn star<R: Rng>(data: &NetworkData, size: CanvasSize, rng: &mut R) -> Self {
		let (cx, cy) = size.center();
		let mut nodes = vec![Node::new(data.focal.clone(), cx, cy, true)];
		let mut edges = Vec::new();
		let mut seen = HashSet::from([data.focal.as_str()]);

		for id in &data.neighbors {
			if !seen.insert(id.as_str()) {
				continue;
			}
			let x = rng.random_range(0.0..size.width.max(1.0));
			let y = rng.random_range(0.0..size.height.max(1.0));
			nodes.push(Node::new(id.clone(), x, y, false));
			edges.push(Edge::new(data.focal.clone(), id.clone()));
		}

		Self { nodes, edges }
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Maps every edge to `(from, to)` node indices.
	pub fn resolve_edges(&self) -> Result<Vec<(usize, usize)>, LayoutError> {
		self.edges
			.iter()
			.map(|e| {
				let from = self.index_of(&e.from).ok_or_else(|| LayoutError::UnknownNode {
					id: e.from.clone(),
				})?;
				let to = self.index_of(&e.to).ok_or_else(|| LayoutError::UnknownNode {
					id: e.to.clone(),
				})?;
				Ok((from, to))
			})
			.collect()
	}

	/// Checks id uniqueness, the single focal node and edge endpoints.
	pub fn validate(&self) -> Result<(), LayoutError> {
		let mut ids = HashSet::new();
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(LayoutError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}
		let count = self.nodes.iter().filter(|n| n.fixed).count();
		if count != 1 {
			return Err(LayoutError::FocalCount { count });
		}
		self.resolve_edges().map(|_| ())
	}
}
