//! Application dependency model visualization.
//!
//! Adapts the dependency graph supplied by the hosting dashboard into the
//! node/link lists the embedded force-graph widget renders, and wraps the
//! widget with its view controls:
//! - Deduplicated render nodes with per-category coloring
//! - Index-based render links
//! - Zoom in/out via the widget's edge length
//! - Toggle between short names and full descriptions
//!
//! # Example
//!
//! ```ignore
//! use app_model_graph::{AppModelGraph, DependencyGraph};
//!
//! let data: DependencyGraph = serde_json::from_str(payload)?;
//!
//! view! { <AppModelGraph data=data_signal root_id=root_signal /> }
//! ```

mod category;
mod component;
mod graph;
mod types;
mod view;

pub use category::LinkCategory;
pub use component::AppModelGraph;
pub use graph::{RenderLink, RenderNode, build_graph};
pub use types::{DependencyGraph, DependencyLink, DependencyNode};
pub use view::Viewport;
