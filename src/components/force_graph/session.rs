//! Lifetime of one running visualization.
//!
//! A [`Session`] owns the state of a single graph and the token every
//! scheduled frame checks before doing any work. A canvas keeps its live
//! session in a [`SessionSlot`]; installing a new one disposes the old one
//! first, so at most one loop per canvas is ever alive.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use crate::components::surface::Surface;
use super::state::NetworkState;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// The part of a session the frame and pointer callbacks hold on to.
#[derive(Clone)]
pub struct SessionHandle {
	state: Rc<RefCell<NetworkState>>,
	token: CancelToken,
}

impl SessionHandle {
	/// One animation frame: step the layout, then draw.
	///
	/// Returns `false` once the loop must not be scheduled again, either
	/// because the session was cancelled or because the graph is malformed.
	pub fn frame<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
		if self.token.is_cancelled() {
			return false;
		}
		let mut state = self.state.borrow_mut();
		if let Err(err) = state.tick() {
			warn!("stopping network layout: {err}");
			self.token.cancel();
			return false;
		}
		state.draw(surface);
		true
	}

	pub fn pointer_move<S: Surface + ?Sized>(&self, surface: &mut S, x: f64, y: f64) {
		if self.token.is_cancelled() {
			return;
		}
		let mut state = self.state.borrow_mut();
		state.set_pointer(x, y);
		state.draw(surface);
	}

	pub fn pointer_leave<S: Surface + ?Sized>(&self, surface: &mut S) {
		if self.token.is_cancelled() {
			return;
		}
		let mut state = self.state.borrow_mut();
		if state.set_hover(None) {
			state.draw(surface);
		}
	}
}

pub struct Session {
	handle: SessionHandle,
	on_dispose: Option<Box<dyn FnOnce()>>,
}

impl Session {
	pub fn new(state: NetworkState) -> Self {
		debug!(
			"starting network session with {} nodes",
			state.graph.nodes.len()
		);
		Self {
			handle: SessionHandle {
				state: Rc::new(RefCell::new(state)),
				token: CancelToken::default(),
			},
			on_dispose: None,
		}
	}

	pub fn handle(&self) -> SessionHandle {
		self.handle.clone()
	}

	/// Registers cleanup for resources the driver attached to this session.
	pub fn on_dispose(&mut self, hook: impl FnOnce() + 'static) {
		self.on_dispose = Some(Box::new(hook));
	}

	/// Cancels the token and runs the dispose hook. Idempotent.
	pub fn dispose(&mut self) {
		self.handle.token.cancel();
		if let Some(hook) = self.on_dispose.take() {
			debug!("disposing network session");
			hook();
		}
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		self.dispose();
	}
}

/// Holds the live session of one canvas.
#[derive(Default)]
pub struct SessionSlot {
	current: Option<Session>,
}

impl SessionSlot {
	pub fn replace(&mut self, session: Session) {
		self.clear();
		self.current = Some(session);
	}

	pub fn clear(&mut self) {
		if let Some(mut previous) = self.current.take() {
			previous.dispose();
		}
	}

	pub fn current(&self) -> Option<SessionHandle> {
		self.current.as_ref().map(Session::handle)
	}
}

#[cfg(test)]
mod tests {
	use crate::components::surface::tests::{Call, Recorder};
	use super::super::types::{CanvasSize, Edge, Graph, Node};
	use super::*;

	fn session() -> Session {
		let graph = Graph {
			nodes: vec![
				Node::new("FOCAL", 250.0, 150.0, true),
				Node::new("N1", 100.0, 100.0, false),
			],
			edges: vec![Edge::new("FOCAL", "N1")],
		};
		Session::new(NetworkState::new(graph, CanvasSize::new(500.0, 300.0)))
	}

	fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
		let calls = Rc::new(Cell::new(0));
		let hook_calls = calls.clone();
		(calls, move || hook_calls.set(hook_calls.get() + 1))
	}

	#[test]
	fn frame_steps_then_draws() {
		let session = session();
		let handle = session.handle();
		let mut surface = Recorder::default();

		assert!(handle.frame(&mut surface));

		let state = handle.state.borrow();
		let n1 = state.graph.node("N1").unwrap();
		assert!((n1.x - 100.45).abs() < 1e-9);
		assert_eq!(surface.calls[0], Call::Clear);
		assert!(surface.calls.contains(&Call::Circle((n1.x, n1.y), "#e74c3c".into())));
	}

	#[test]
	fn dispose_cancels_and_runs_hook_once() {
		let (calls, hook) = counter();
		let mut session = session();
		let token = session.handle().token.clone();
		session.on_dispose(hook);

		session.dispose();
		session.dispose();
		drop(session);

		assert!(token.is_cancelled());
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn cancelled_frame_does_nothing() {
		let mut session = session();
		let handle = session.handle();
		session.dispose();

		let mut surface = Recorder::default();
		assert!(!handle.frame(&mut surface));
		handle.pointer_move(&mut surface, 250.0, 150.0);

		assert!(surface.calls.is_empty());
		let state = handle.state.borrow();
		assert_eq!(state.graph.node("N1").unwrap().x, 100.0);
	}

	#[test]
	fn replacing_slot_disposes_previous_session() {
		let (calls, hook) = counter();
		let mut first = session();
		first.on_dispose(hook);
		let first_token = first.handle().token.clone();

		let mut slot = SessionSlot::default();
		slot.replace(first);
		assert!(!first_token.is_cancelled());

		let second = session();
		let second_token = second.handle().token.clone();
		slot.replace(second);

		assert!(first_token.is_cancelled());
		assert_eq!(calls.get(), 1);
		assert!(!second_token.is_cancelled());
		assert!(slot.current().is_some());

		slot.clear();
		assert!(second_token.is_cancelled());
		assert!(slot.current().is_none());
	}

	#[test]
	fn malformed_graph_stops_the_loop() {
		let graph = Graph {
			nodes: vec![Node::new("FOCAL", 250.0, 150.0, true)],
			edges: vec![Edge::new("FOCAL", "missing")],
		};
		let session = Session::new(NetworkState::new(graph, CanvasSize::new(500.0, 300.0)));
		let handle = session.handle();
		let mut surface = Recorder::default();

		assert!(!handle.frame(&mut surface));
		assert!(handle.token.is_cancelled());
		assert!(surface.calls.is_empty());
	}

	#[test]
	fn pointer_move_redraws_with_tooltip() {
		let session = session();
		let handle = session.handle();
		let mut surface = Recorder::default();

		handle.pointer_move(&mut surface, 100.0, 100.0);
		assert_eq!(surface.count(|c| matches!(c, Call::Rect(..))), 1);

		let mut after_leave = Recorder::default();
		handle.pointer_leave(&mut after_leave);
		assert_eq!(after_leave.count(|c| matches!(c, Call::Rect(..))), 0);
		assert_eq!(after_leave.calls[0], Call::Clear);
	}
}
