//! Drawing-surface capability shared by the canvas renderers.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FALLBACK_WIDTH: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	pub color: &'static str,
	pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Left,
	Center,
	Right,
}

impl TextAlign {
	fn as_str(self) -> &'static str {
		match self {
			TextAlign::Left => "left",
			TextAlign::Center => "center",
			TextAlign::Right => "right",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
	pub font: &'static str,
	pub color: &'static str,
	pub align: TextAlign,
}

/// The drawing primitives the network and chart renderers need.
pub trait Surface {
	fn clear(&mut self);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke);
	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, outline: Option<&Stroke>);
	fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str);
	fn text(&mut self, text: &str, at: (f64, f64), style: &TextStyle);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self) {
		if let Some(canvas) = self.canvas() {
			self.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
		}
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke) {
		self.set_stroke_style_str(stroke.color);
		self.set_line_width(stroke.width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, outline: Option<&Stroke>) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		if let Some(outline) = outline {
			self.set_stroke_style_str(outline.color);
			self.set_line_width(outline.width);
			self.stroke();
		}
	}

	fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
		self.set_fill_style_str(fill);
		self.fill_rect(x, y, width, height);
	}

	fn text(&mut self, text: &str, at: (f64, f64), style: &TextStyle) {
		self.set_fill_style_str(style.color);
		self.set_font(style.font);
		self.set_text_align(style.align.as_str());
		let _ = self.fill_text(text, at.0, at.1);
	}
}

/// Whole-pixel size of a canvas backing store for the requested size.
pub fn backing_size(width: f64, height: f64) -> (f64, f64) {
	(width.round().max(1.0), height.round().max(1.0))
}

/// Sizes the canvas backing store, taking the parent's width when `width`
/// is not given, and returns the size actually applied.
pub fn fit_canvas(canvas: &HtmlCanvasElement, width: Option<f64>, height: f64) -> (f64, f64) {
	let requested = width.unwrap_or_else(|| {
		canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(FALLBACK_WIDTH)
	});
	let (w, h) = backing_size(requested, height);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub(crate) enum Call {
		Clear,
		Line((f64, f64), (f64, f64)),
		Circle((f64, f64), String),
		Rect(f64, f64, f64, f64),
		Text(String, (f64, f64), TextAlign),
	}

	#[derive(Debug, Default)]
	pub(crate) struct Recorder {
		pub calls: Vec<Call>,
	}

	impl Recorder {
		pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
			self.calls.iter().filter(|c| pred(c)).count()
		}
	}

	impl Surface for Recorder {
		fn clear(&mut self) {
			self.calls.push(Call::Clear);
		}

		fn line(&mut self, from: (f64, f64), to: (f64, f64), _: &Stroke) {
			self.calls.push(Call::Line(from, to));
		}

		fn circle(&mut self, center: (f64, f64), _: f64, fill: &str, _: Option<&Stroke>) {
			self.calls.push(Call::Circle(center, fill.to_string()));
		}

		fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, _: &str) {
			self.calls.push(Call::Rect(x, y, width, height));
		}

		fn text(&mut self, text: &str, at: (f64, f64), style: &TextStyle) {
			self.calls.push(Call::Text(text.to_string(), at, style.align));
		}
	}

	#[test]
	fn backing_size_is_whole_pixels() {
		assert_eq!(backing_size(612.6, 300.0), (613.0, 300.0));
		assert_eq!(backing_size(612.4, 199.5), (612.0, 200.0));
		let (w, h) = backing_size(0.2, 0.0);
		assert_eq!((w, h), (1.0, 1.0));
		assert_eq!(w as u32 as f64, w);
	}
}
