//! app-model-graph: dependency model visualization for the dev dashboard.
//!
//! This crate provides a WASM-based widget that renders an application's
//! dependency model (components and their typed relations) through an
//! embedded force-graph element, with zoom and label-verbosity controls.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::app_model::{
	AppModelGraph, DependencyGraph, DependencyLink, DependencyNode,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("app-model-graph: logging initialized");
}

/// Load the dependency model from a script element with id="app-model-data".
/// Expected format: JSON with { nodes: [...], links: [...] }. The root
/// artifact id comes from the element's data-root attribute, defaulting to
/// the first node (the dashboard emits the application artifact first).
fn load_model_data() -> Option<(DependencyGraph, String)> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("app-model-data")?;
	let root_attr = element.get_attribute("data-root");
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<DependencyGraph>(&json_text) {
		Ok(data) => {
			info!(
				"app-model-graph: loaded {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);
			let root_id = root_attr
				.or_else(|| data.nodes.first().map(|node| node.id.clone()))
				.unwrap_or_default();
			Some((data, root_id))
		}
		Err(e) => {
			warn!("app-model-graph: failed to parse dependency model: {e}");
			None
		}
	}
}

/// Main application component.
/// Loads the dependency model from the DOM once and renders the widget.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Read the model once at initialization
	let (data, root_id) = load_model_data().unwrap_or_default();
	let data_signal = Signal::derive(move || data.clone());
	let root_signal = Signal::derive(move || root_id.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Application Dependencies" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-model-page">
			<AppModelGraph data=data_signal root_id=root_signal />
		</div>
	}
}
