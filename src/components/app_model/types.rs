//! Raw dependency model as supplied by the hosting dashboard.

use serde::Deserialize;

/// A component in the application's dependency model.
#[derive(Clone, Debug, Deserialize)]
pub struct DependencyNode {
	/// Unique identifier, used to reference this node from links.
	pub id: String,
	/// Short display name (compact coordinates).
	pub name: String,
	/// Longer human-readable description (full coordinates).
	pub description: String,
	/// Relative display weight. The dashboard emits 1 for every artifact.
	#[serde(default = "default_node_value")]
	pub value: u32,
}

fn default_node_value() -> u32 {
	1
}

/// A typed dependency relation between two components.
#[derive(Clone, Debug, Deserialize)]
pub struct DependencyLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Relation kind: "root", "deployment" or "runtime".
	#[serde(rename = "type")]
	pub kind: String,
}

/// Complete dependency model: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DependencyGraph {
	/// All components, application artifact first.
	pub nodes: Vec<DependencyNode>,
	/// All dependency relations between components.
	pub links: Vec<DependencyLink>,
}
