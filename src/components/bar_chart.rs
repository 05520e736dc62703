//! Single-bar chart drawn through [`Surface`].

use leptos::prelude::*;
use log::error;
use web_sys::HtmlCanvasElement;

use crate::components::surface::{Stroke, Surface, TextAlign, TextStyle, context_2d, fit_canvas};

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICKS: f64 = 5.0;

const BAR_FILL: &str = "#3498db";
const AXIS: Stroke = Stroke {
	color: "#2c3e50",
	width: 1.0,
};
const GRID: Stroke = Stroke {
	color: "#ecf0f1",
	width: 1.0,
};
const TITLE: TextStyle = TextStyle {
	font: "bold 14px Arial",
	color: "#2c3e50",
	align: TextAlign::Center,
};
const AXIS_TITLE: TextStyle = TextStyle {
	font: "12px Arial",
	color: "#2c3e50",
	align: TextAlign::Left,
};
const TICK_LABEL: TextStyle = TextStyle {
	font: "11px Arial",
	color: "#7f8c8d",
	align: TextAlign::Right,
};
const CATEGORY: TextStyle = TextStyle {
	font: "12px Arial",
	color: "#2c3e50",
	align: TextAlign::Center,
};

/// One labelled value and the captions around it.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartData {
	pub title: String,
	pub axis_title: String,
	pub label: String,
	pub value: Option<f64>,
}

/// Top of the value axis and its tick step, on a 1/2/5 scale.
pub fn value_axis(max: f64) -> (f64, f64) {
	if !(max.is_finite() && max > 0.0) {
		return (TICKS, 1.0);
	}
	let raw = max / TICKS;
	let magnitude = 10f64.powi(raw.log10().floor() as i32);
	let nice = match raw / magnitude {
		n if n <= 1.0 => 1.0,
		n if n <= 2.0 => 2.0,
		n if n <= 5.0 => 5.0,
		_ => 10.0,
	};
	let step = nice * magnitude;
	((max / step).ceil() * step, step)
}

fn format_tick(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		format!("{value}")
	}
}

/// Paints `data` as a single centered bar on a `width` x `height` surface.
pub fn draw_bar_chart<S: Surface + ?Sized>(surface: &mut S, (width, height): (f64, f64), data: &BarChartData) {
	surface.clear();
	surface.text(&data.title, (width / 2.0, 24.0), &TITLE);

	let (left, right) = (MARGIN_LEFT, width - MARGIN_RIGHT);
	let (top, bottom) = (MARGIN_TOP, height - MARGIN_BOTTOM);
	let plot_height = bottom - top;
	surface.text(&data.axis_title, (left, top - 10.0), &AXIS_TITLE);

	let (axis_top, step) = value_axis(data.value.unwrap_or(0.0));
	let ticks = (axis_top / step).round() as usize;
	for i in 0..=ticks {
		let value = i as f64 * step;
		let y = bottom - value / axis_top * plot_height;
		if i > 0 {
			surface.line((left, y), (right, y), &GRID);
		}
		surface.text(&format_tick(value), (left - 6.0, y + 4.0), &TICK_LABEL);
	}
	surface.line((left, top), (left, bottom), &AXIS);
	surface.line((left, bottom), (right, bottom), &AXIS);

	let center = (left + right) / 2.0;
	match data.value {
		Some(value) => {
			let bar_width = (right - left) / 2.0;
			let bar_height = value.max(0.0) / axis_top * plot_height;
			surface.rect(center - bar_width / 2.0, bottom - bar_height, bar_width, bar_height, BAR_FILL);
		}
		None => surface.text("No data", (center, top + plot_height / 2.0), &CATEGORY),
	}
	surface.text(&data.label, (center, bottom + 18.0), &CATEGORY);
}

/// Canvas showing `data` as a bar chart; hidden while `data` is `None`.
#[component]
pub fn BarChart(
	#[prop(into)] data: Signal<Option<BarChartData>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let data = data.get();
		let (Some(canvas), Some(data)) = (canvas_ref.get(), data) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let size = fit_canvas(&canvas, width, height);
		match context_2d(&canvas) {
			Some(mut ctx) => draw_bar_chart(&mut ctx, size, &data),
			None => error!("no 2d context for chart {}", data.title),
		}
	});

	let display = move || {
		if data.get().is_some() {
			"display: block;"
		} else {
			"display: none;"
		}
	};

	view! { <canvas node_ref=canvas_ref class="bar-chart" style=display /> }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::surface::tests::{Call, Recorder};

	fn hemoglobin(value: Option<f64>) -> BarChartData {
		BarChartData {
			title: "Protein Sequence Length".into(),
			axis_title: "Amino Acids".into(),
			label: "Hemoglobin subunit alpha".into(),
			value,
		}
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn value_axis_rounds_up_to_a_nice_step() {
		assert_eq!(value_axis(142.0), (150.0, 50.0));
		assert_eq!(value_axis(100.0), (100.0, 20.0));
		assert_eq!(value_axis(3.0), (3.0, 1.0));
		assert_eq!(value_axis(0.0), (5.0, 1.0));
		assert_eq!(value_axis(f64::NAN), (5.0, 1.0));
	}

	#[test]
	fn bar_is_centered_and_scaled_to_the_axis() {
		let mut surface = Recorder::default();
		draw_bar_chart(&mut surface, (400.0, 300.0), &hemoglobin(Some(142.0)));

		let bars: Vec<_> = surface
			.calls
			.iter()
			.filter_map(|c| match c {
				Call::Rect(x, y, w, h) => Some((*x, *y, *w, *h)),
				_ => None,
			})
			.collect();
		assert_eq!(bars.len(), 1);
		let (x, y, w, h) = bars[0];
		assert!(close(x, 140.0) && close(w, 160.0));
		assert!(close(h, 198.8), "height {h}");
		assert!(close(y, 61.2), "y {y}");
	}

	#[test]
	fn tick_labels_cover_the_axis() {
		let mut surface = Recorder::default();
		draw_bar_chart(&mut surface, (400.0, 300.0), &hemoglobin(Some(142.0)));

		let ticks: Vec<_> = surface
			.calls
			.iter()
			.filter_map(|c| match c {
				Call::Text(t, _, TextAlign::Right) => Some(t.as_str()),
				_ => None,
			})
			.collect();
		assert_eq!(ticks, ["0", "50", "100", "150"]);
	}

	#[test]
	fn missing_value_draws_no_bar() {
		let mut surface = Recorder::default();
		draw_bar_chart(&mut surface, (400.0, 300.0), &hemoglobin(None));

		assert_eq!(surface.calls[0], Call::Clear);
		assert_eq!(surface.count(|c| matches!(c, Call::Rect(..))), 0);
		assert!(surface
			.calls
			.iter()
			.any(|c| matches!(c, Call::Text(t, _, TextAlign::Center) if t == "No data")));
	}

	#[test]
	fn title_and_category_label_are_drawn() {
		let mut surface = Recorder::default();
		draw_bar_chart(&mut surface, (400.0, 300.0), &hemoglobin(Some(142.0)));

		assert_eq!(
			surface.calls[1],
			Call::Text("Protein Sequence Length".into(), (200.0, 24.0), TextAlign::Center)
		);
		assert!(surface.calls.contains(&Call::Text(
			"Hemoglobin subunit alpha".into(),
			(220.0, 278.0),
			TextAlign::Center
		)));
	}
}
