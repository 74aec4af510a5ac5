//! Transformation from the raw dependency model into render-ready lists.
//!
//! The embedded widget wants links expressed as indices into a node list, so
//! this module resolves ids to positions and deduplicates the nodes that the
//! links actually touch. Pure functions, no DOM involved.

use serde::Serialize;

use super::category::LinkCategory;
use super::types::{DependencyGraph, DependencyNode};

/// A node in the shape the embedded graph widget expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderNode {
	/// Label shown next to the node: short name or full description,
	/// depending on the verbosity flag at build time.
	pub name: String,
	/// Relative display weight.
	pub value: u32,
	/// Source node id, kept for deduplication and tooltips.
	pub id: String,
	/// Full description, always available for tooltips.
	pub description: String,
	/// Category index into the legend lists, or -1 for unknown kinds.
	pub category: i32,
}

/// A link in the shape the embedded graph widget expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderLink {
	/// Position of the source node in the source node list, or -1.
	pub source: i32,
	/// Position of the target node in the source node list, or -1.
	pub target: i32,
}

/// Build the deduplicated render-node list and index-based render links.
///
/// Nodes whose id equals `root_id` are forced into the root category; all
/// other nodes take the category of the link that first reached them. When
/// `simple_labels` is set the short name is used as the label, otherwise the
/// longer description. Unresolvable ids and unknown kinds degrade to -1
/// rather than failing; the full lists are rebuilt on every call.
pub fn build_graph(
	data: &DependencyGraph,
	root_id: &str,
	simple_labels: bool,
) -> (Vec<RenderNode>, Vec<RenderLink>) {
	let mut nodes: Vec<RenderNode> = Vec::new();
	let mut links: Vec<RenderLink> = Vec::with_capacity(data.links.len());

	for link in &data.links {
		let source = node_index(&data.nodes, &link.source);
		let target = node_index(&data.nodes, &link.target);
		let category = LinkCategory::from_kind(&link.kind).map_or(-1, LinkCategory::index);

		append_node(&mut nodes, &data.nodes, source, root_id, category, simple_labels);
		append_node(&mut nodes, &data.nodes, target, root_id, category, simple_labels);
		links.push(RenderLink { source, target });
	}

	(nodes, links)
}

/// Position of `id` in the source node list (first match), or -1 when absent.
fn node_index(nodes: &[DependencyNode], id: &str) -> i32 {
	nodes
		.iter()
		.position(|node| node.id == id)
		.map_or(-1, |i| i as i32)
}

/// Append the node at `index` to the render list unless its id is already
/// there. Unresolved indices append nothing.
fn append_node(
	out: &mut Vec<RenderNode>,
	source_nodes: &[DependencyNode],
	index: i32,
	root_id: &str,
	category: i32,
	simple_labels: bool,
) {
	let Some(node) = usize::try_from(index)
		.ok()
		.and_then(|i| source_nodes.get(i))
	else {
		return;
	};
	if out.iter().any(|existing| existing.id == node.id) {
		return;
	}

	let category = if node.id == root_id {
		LinkCategory::Root.index()
	} else {
		category
	};
	let name = if simple_labels {
		node.name.clone()
	} else {
		node.description.clone()
	};

	out.push(RenderNode {
		name,
		value: node.value,
		id: node.id.clone(),
		description: node.description.clone(),
		category,
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::app_model::types::DependencyLink;

	fn node(id: &str) -> DependencyNode {
		DependencyNode {
			id: id.to_string(),
			name: id.to_string(),
			description: format!("{id} (full description)"),
			value: 1,
		}
	}

	fn link(source: &str, target: &str, kind: &str) -> DependencyLink {
		DependencyLink {
			source: source.to_string(),
			target: target.to_string(),
			kind: kind.to_string(),
		}
	}

	fn graph(nodes: Vec<DependencyNode>, links: Vec<DependencyLink>) -> DependencyGraph {
		DependencyGraph { nodes, links }
	}

	#[test]
	fn resolves_links_to_node_indices() {
		let data = graph(vec![node("A"), node("B")], vec![link("A", "B", "runtime")]);
		let (nodes, links) = build_graph(&data, "", false);

		assert_eq!(links, vec![RenderLink { source: 0, target: 1 }]);
		assert_eq!(nodes.len(), 2);
		assert!(nodes.iter().all(|n| n.category == 2));
	}

	#[test]
	fn deduplicates_shared_endpoints() {
		let data = graph(
			vec![node("A"), node("B"), node("C")],
			vec![
				link("A", "B", "runtime"),
				link("A", "C", "runtime"),
				link("B", "C", "deployment"),
			],
		);
		let (nodes, links) = build_graph(&data, "", false);

		assert_eq!(links.len(), 3);
		assert_eq!(nodes.len(), 3);
		let mut ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), 3);
	}

	#[test]
	fn root_id_forces_root_category() {
		let data = graph(vec![node("A"), node("B")], vec![link("A", "B", "runtime")]);
		let (nodes, _) = build_graph(&data, "A", false);

		assert_eq!(nodes[0].id, "A");
		assert_eq!(nodes[0].category, 0);
		assert_eq!(nodes[1].category, 2);
	}

	#[test]
	fn unknown_kind_maps_to_unresolved_category() {
		let data = graph(vec![node("A"), node("B")], vec![link("A", "B", "test")]);
		let (nodes, links) = build_graph(&data, "", false);

		assert_eq!(links.len(), 1);
		assert!(nodes.iter().all(|n| n.category == -1));
	}

	#[test]
	fn missing_endpoint_yields_unresolved_index() {
		let data = graph(vec![node("A")], vec![link("A", "X", "runtime")]);
		let (nodes, links) = build_graph(&data, "", false);

		assert_eq!(links, vec![RenderLink { source: 0, target: -1 }]);
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].id, "A");
	}

	#[test]
	fn label_follows_verbosity_flag() {
		let data = graph(vec![node("A"), node("B")], vec![link("A", "B", "runtime")]);

		let (simple, _) = build_graph(&data, "", true);
		assert_eq!(simple[0].name, "A");

		let (verbose, _) = build_graph(&data, "", false);
		assert_eq!(verbose[0].name, "A (full description)");

		// Toggling back yields the original labels again.
		let (simple_again, _) = build_graph(&data, "", true);
		assert_eq!(simple, simple_again);
	}

	#[test]
	fn serializes_in_widget_shape() {
		let data = graph(vec![node("A"), node("B")], vec![link("A", "B", "runtime")]);
		let (nodes, links) = build_graph(&data, "A", true);

		let json = serde_json::to_value(&nodes[0]).unwrap();
		assert_eq!(json["name"], "A");
		assert_eq!(json["value"], 1);
		assert_eq!(json["id"], "A");
		assert_eq!(json["description"], "A (full description)");
		assert_eq!(json["category"], 0);

		let json = serde_json::to_value(&links[0]).unwrap();
		assert_eq!(json["source"], 0);
		assert_eq!(json["target"], 1);
	}
}
