//! Leptos component wrapping the embedded force-graph widget.
//!
//! The widget itself (`<echarts-force-graph>`) is provided by the hosting
//! dashboard; this component feeds it serialized categories, colors, nodes,
//! links and the current edge length, and re-serializes whenever the payload
//! or a control changes.

use leptos::prelude::*;
use log::warn;
use serde::Serialize;

use super::category::LinkCategory;
use super::graph::build_graph;
use super::types::DependencyGraph;
use super::view::Viewport;

/// Serialize a widget attribute value, falling back to an empty list so a
/// bad value blanks the graph instead of wedging the widget.
fn attr_json<T: Serialize>(value: &T) -> String {
	serde_json::to_string(value).unwrap_or_else(|e| {
		warn!("app-model-graph: failed to serialize widget attribute: {e}");
		String::from("[]")
	})
}

/// Renders the application's dependency model through the embedded
/// force-graph widget, with zoom buttons and a label-verbosity toggle.
///
/// `root_id` designates the application's own artifact; its node is always
/// drawn in the root category regardless of how links reach it. The node and
/// link lists are rebuilt whenever `data`, `root_id` or the verbosity toggle
/// change; zooming only updates the widget's edge length.
#[component]
pub fn AppModelGraph(
	/// The dependency model to visualize.
	#[prop(into)]
	data: Signal<DependencyGraph>,
	/// Id of the application's root artifact.
	#[prop(into)]
	root_id: Signal<String>,
	/// Widget width in pixels.
	#[prop(default = 400.0)]
	width: f64,
	/// Widget height in pixels.
	#[prop(default = 400.0)]
	height: f64,
) -> impl IntoView {
	let (viewport, set_viewport) = signal(Viewport::default());
	let (simple_labels, set_simple_labels) = signal(false);

	let rendered = Memo::new(move |_| {
		build_graph(&data.get(), &root_id.get(), simple_labels.get())
	});

	let categories = attr_json(&LinkCategory::names());
	let colors = attr_json(&LinkCategory::colors());

	view! {
		<div class="top-bar">
			<label>
				<input
					type="checkbox"
					prop:checked=move || simple_labels.get()
					on:change=move |ev| set_simple_labels.set(event_target_checked(&ev))
				/>
				"Simple description"
			</label>
			<button aria-label="Zoom in" on:click=move |_| set_viewport.update(Viewport::zoom_in)>
				"+"
			</button>
			<button aria-label="Zoom out" on:click=move |_| set_viewport.update(Viewport::zoom_out)>
				"-"
			</button>
		</div>
		<echarts-force-graph
			width=format!("{width}px")
			height=format!("{height}px")
			edgeLength=move || viewport.get().edge_length.to_string()
			categories=categories
			colors=colors
			nodes=move || attr_json(&rendered.get().0)
			links=move || attr_json(&rendered.get().1)
		></echarts-force-graph>
	}
}
