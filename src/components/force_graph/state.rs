use super::error::LayoutError;
use super::layout::LayoutEngine;
use super::render;
use crate::components::surface::Surface;
use super::types::{CanvasSize, Graph, Node};

/// One graph being laid out on one canvas.
pub struct NetworkState {
	pub graph: Graph,
	engine: LayoutEngine,
	hovered: Option<String>,
}

impl NetworkState {
	pub fn new(graph: Graph, size: CanvasSize) -> Self {
		Self {
			graph,
			engine: LayoutEngine::new(size),
			hovered: None,
		}
	}

	pub fn tick(&mut self) -> Result<(), LayoutError> {
		self.engine.step(&mut self.graph)
	}

	pub fn hovered(&self) -> Option<&Node> {
		self.hovered.as_deref().and_then(|id| self.graph.node(id))
	}

	/// Re-runs the hit test at the pointer and returns whether the hovered
	/// node changed.
	pub fn set_pointer(&mut self, x: f64, y: f64) -> bool {
		let hit = render::hit_test(&self.graph, x, y).map(|n| n.id.clone());
		self.set_hover(hit)
	}

	pub fn set_hover(&mut self, id: Option<String>) -> bool {
		if self.hovered == id {
			return false;
		}
		self.hovered = id;
		true
	}

	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		render::draw(surface, &self.graph, self.hovered());
	}
}

#[cfg(test)]
mod tests {
	use crate::components::surface::tests::{Call, Recorder};
	use super::super::types::Edge;
	use super::*;

	fn state() -> NetworkState {
		let graph = Graph {
			nodes: vec![
				Node::new("FOCAL", 250.0, 150.0, true),
				Node::new("N1", 100.0, 100.0, false),
			],
			edges: vec![Edge::new("FOCAL", "N1")],
		};
		NetworkState::new(graph, CanvasSize::new(500.0, 300.0))
	}

	#[test]
	fn pointer_over_node_sets_hover() {
		let mut state = state();
		assert!(state.set_pointer(252.0, 149.0));
		assert_eq!(state.hovered().map(|n| n.id.as_str()), Some("FOCAL"));
		assert!(!state.set_pointer(251.0, 150.0));

		assert!(state.set_pointer(0.0, 0.0));
		assert!(state.hovered().is_none());
	}

	#[test]
	fn hover_tooltip_follows_the_node() {
		let mut state = state();
		state.set_hover(Some("N1".into()));
		state.tick().unwrap();

		let mut surface = Recorder::default();
		state.draw(&mut surface);

		let n1 = state.graph.node("N1").unwrap();
		assert!(
			surface
				.calls
				.contains(&Call::Rect(n1.x + 20.0, n1.y - 15.0, 22.0, 20.0))
		);
	}

	#[test]
	fn hover_on_missing_id_draws_no_tooltip() {
		let mut state = state();
		state.set_hover(Some("gone".into()));
		let mut surface = Recorder::default();
		state.draw(&mut surface);
		assert_eq!(surface.count(|c| matches!(c, Call::Rect(..))), 0);
	}
}
