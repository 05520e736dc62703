use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};

use super::tickets::Tickets;
use crate::components::bar_chart::BarChart;
use crate::components::force_graph::{NetworkCanvas, NetworkData};
use crate::sources::{self, Annotation, DEFAULT_PROTEIN, FetchError, Lookup, SourceConfig};

/// Where a panel's most recent request stands.
#[derive(Clone, Debug, PartialEq)]
enum Outcome<T> {
	Idle,
	Loading,
	Failed(String),
	Found(T),
}

fn query_or(typed: &str, default: &str) -> String {
	match typed.trim() {
		"" => default.to_string(),
		q => q.to_string(),
	}
}

/// Runs `request` and stores its result in `set_outcome`, unless a newer
/// request of the same panel was started meanwhile.
fn spawn_lookup<T, F>(
	tickets: StoredValue<Tickets>,
	set_outcome: WriteSignal<Outcome<T>>,
	label: String,
	request: F,
) where
	T: Send + Sync + 'static,
	F: Future<Output = Result<T, FetchError>> + 'static,
{
	let mut ticket = 0;
	tickets.update_value(|t| ticket = t.issue());
	set_outcome.set(Outcome::Loading);

	spawn_local(async move {
		let result = request.await;
		let Some(result) = tickets.try_with_value(|t| t.accept(ticket, result)).flatten() else {
			debug!("dropping stale result for {label}");
			return;
		};
		set_outcome.set(match result {
			Ok(value) => Outcome::Found(value),
			Err(err) => {
				error!("{label} failed: {err}");
				Outcome::Failed(err.to_string())
			}
		});
	});
}

fn status_view<T>(outcome: &Outcome<T>) -> Option<AnyView> {
	match outcome {
		Outcome::Idle => Some(().into_any()),
		Outcome::Loading => Some(view! { <pre class="lookup-output">"Loading..."</pre> }.into_any()),
		Outcome::Failed(err) => {
			let text = format!("Error: {err}");
			Some(view! { <pre class="lookup-output">{text}</pre> }.into_any())
		}
		Outcome::Found(_) => None,
	}
}

fn compounds_view(data: &NetworkData) -> AnyView {
	let items = if data.neighbors.is_empty() {
		view! { <p>"No compounds found"</p> }.into_any()
	} else {
		data.neighbors
			.iter()
			.map(|cid| view! { <div class="compound-item">{cid.clone()}</div> })
			.collect_view()
			.into_any()
	};
	view! {
		<div class="lookup-output">
			<h4>"Related Compounds:"</h4>
			{items}
		</div>
	}
	.into_any()
}

/// A query box, its result and the network it yields.
#[component]
fn LookupPanel(kind: Lookup, title: &'static str) -> impl IntoView {
	let config = use_context::<SourceConfig>().unwrap_or_default();
	let (query, set_query) = signal(String::new());
	let (outcome, set_outcome) = signal(Outcome::<NetworkData>::Idle);
	let tickets = StoredValue::new(Tickets::default());

	let network = Signal::derive(move || {
		outcome.with(|o| match o {
			Outcome::Found(data) => kind.network(data.clone()),
			_ => None,
		})
	});

	let run = move || {
		let query = query_or(&query.get_untracked(), kind.default_query());
		let config = config.clone();
		let label = format!("{kind:?} lookup for {query}");
		spawn_lookup(tickets, set_outcome, label, async move {
			sources::lookup(kind, &query, &config).await
		});
	};

	let output = move || {
		outcome.with(|o| {
			status_view(o).unwrap_or_else(|| match (o, kind) {
				(Outcome::Found(data), Lookup::Compounds) => compounds_view(data),
				(Outcome::Found(data), Lookup::Interactions) => {
					let text = sources::interaction_summary(data);
					view! { <pre class="lookup-output">{text}</pre> }.into_any()
				}
				_ => ().into_any(),
			})
		})
	};

	view! {
		<section class="lookup-panel">
			<h2>{title}</h2>
			<div class="lookup-form">
				<input
					type="text"
					placeholder=kind.default_query()
					prop:value=query
					on:input=move |ev| set_query.set(event_target_value(&ev))
				/>
				<button on:click=move |_| run()>"Look up"</button>
			</div>
			{output}
			<NetworkCanvas data=network height=kind.canvas_height() />
		</section>
	}
}

/// A protein id box, its UniProt summary and a sequence-length chart.
#[component]
fn AnnotationPanel() -> impl IntoView {
	let config = use_context::<SourceConfig>().unwrap_or_default();
	let (query, set_query) = signal(String::new());
	let (outcome, set_outcome) = signal(Outcome::<Annotation>::Idle);
	let tickets = StoredValue::new(Tickets::default());

	let chart = Signal::derive(move || {
		outcome.with(|o| match o {
			Outcome::Found(annotation) => Some(annotation.chart()),
			_ => None,
		})
	});

	let run = move || {
		let protein_id = query_or(&query.get_untracked(), DEFAULT_PROTEIN);
		let config = config.clone();
		let label = format!("annotation of {protein_id}");
		spawn_lookup(tickets, set_outcome, label, async move {
			sources::annotate(&protein_id, &config).await
		});
	};

	let output = move || {
		outcome.with(|o| {
			status_view(o).unwrap_or_else(|| match o {
				Outcome::Found(annotation) => {
					let text = annotation.summary();
					view! { <pre class="lookup-output">{text}</pre> }.into_any()
				}
				_ => ().into_any(),
			})
		})
	};

	view! {
		<section class="lookup-panel">
			<h2>"Protein annotation"</h2>
			<div class="lookup-form">
				<input
					type="text"
					placeholder=DEFAULT_PROTEIN
					prop:value=query
					on:input=move |ev| set_query.set(event_target_value(&ev))
				/>
				<button on:click=move |_| run()>"Look up"</button>
			</div>
			{output}
			<BarChart data=chart />
		</section>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="network-pages">
				<h1>"Interaction Networks"</h1>
				<AnnotationPanel />
				<LookupPanel kind=Lookup::Interactions title="Protein interactions" />
				<LookupPanel kind=Lookup::Compounds title="Related compounds" />
			</div>
		</ErrorBoundary>
	}
}
