use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::session::{Session, SessionSlot};
use super::state::NetworkState;
use super::types::{CanvasSize, Graph, NetworkData};
use crate::components::surface::{context_2d, fit_canvas};

/// Canvas showing a live force-directed star network for `data`.
///
/// Each new value of `data` replaces the running session; `None` stops it.
#[component]
pub fn NetworkCanvas(
	#[prop(into)] data: Signal<Option<NetworkData>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	// Dropping the slot with the component's owner disposes the live session.
	let slot = StoredValue::new_local(SessionSlot::default());

	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let Some(data) = data else {
			slot.update_value(SessionSlot::clear);
			return;
		};
		match start_session(&canvas, &data, width, height) {
			Some(session) => slot.update_value(|s| s.replace(session)),
			None => error!("could not start network session for {}", data.focal),
		}
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let (Some(handle), Some(mut ctx)) =
			(slot.with_value(SessionSlot::current), context_2d(&canvas))
		{
			handle.pointer_move(&mut ctx, x, y);
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let (Some(handle), Some(mut ctx)) =
			(slot.with_value(SessionSlot::current), context_2d(&canvas))
		{
			handle.pointer_leave(&mut ctx);
		}
	};

	let display = move || {
		if data.get().is_some() {
			"display: block;"
		} else {
			"display: none;"
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style=display
		/>
	}
}

/// Sizes the canvas, builds the graph and starts its animation loop.
fn start_session(
	canvas: &HtmlCanvasElement,
	data: &NetworkData,
	width: Option<f64>,
	height: f64,
) -> Option<Session> {
	let window = web_sys::window()?;
	let (w, h) = fit_canvas(canvas, width, height);
	let mut ctx = context_2d(canvas)?;

	let size = CanvasSize::new(w, h);
	let mut rng = StdRng::seed_from_u64(placement_seed());
	let graph = Graph::star(data, size, &mut rng);
	if let Err(err) = graph.validate() {
		error!("refusing to lay out {}: {err}", data.focal);
		return None;
	}
	let mut session = Session::new(NetworkState::new(graph, size));
	let handle = session.handle();

	let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::default();
	let pending: Rc<Cell<Option<i32>>> = Rc::default();
	let (frame_inner, pending_inner) = (frame.clone(), pending.clone());
	*frame.borrow_mut() = Some(Closure::new(move || {
		pending_inner.set(None);
		if !handle.frame(&mut ctx) {
			return;
		}
		if let (Some(window), Some(cb)) = (web_sys::window(), frame_inner.borrow().as_ref()) {
			pending_inner.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}));
	if let Some(ref cb) = *frame.borrow() {
		pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
	}

	session.on_dispose(move || {
		if let (Some(id), Some(window)) = (pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		frame.borrow_mut().take();
	});
	Some(session)
}

fn placement_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
