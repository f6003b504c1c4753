use std::collections::HashMap;

use super::node::{NodeIndex, TemplateNode};
use super::record::GroupId;

/// The template hierarchy built from a flat record sequence.
///
/// Nodes are stored in a contiguous arena and referenced by `NodeIndex`,
/// which keeps the structure free of ownership cycles: the tree owns every
/// node, each node owns its child slots, and parent links are plain
/// indices.
///
/// # Structure
/// - `nodes`: the arena; the root is always slot 0.
/// - `all_nodes`: id → node index, covering every node created during the
///   build. When several nodes were created for the same id, the entry
///   points at the most recently created one.
///
/// # Lifecycle
/// Built once by `TemplateTreeBuilder` and read-only afterwards: every
/// mutating method is crate-internal, so a finished tree can be shared
/// freely across generation calls (and across threads, with per-call
/// random sources).
#[derive(Clone, Debug)]
pub struct TemplateTree {
	nodes: Vec<TemplateNode>,
	root: NodeIndex,
	all_nodes: HashMap<GroupId, NodeIndex>,
}

impl TemplateTree {
	/// Creates a tree holding only its root node.
	pub(crate) fn new(root_id: GroupId) -> Self {
		let root = TemplateNode::new(root_id.clone(), None);
		let mut all_nodes = HashMap::new();
		all_nodes.insert(root_id, 0);
		Self {
			nodes: vec![root],
			root: 0,
			all_nodes,
		}
	}

	/// Returns the index of the root node.
	pub fn root(&self) -> NodeIndex {
		self.root
	}

	/// Returns the id of the root group.
	pub fn root_id(&self) -> &GroupId {
		self.nodes[self.root].id()
	}

	/// Returns the node at the given index.
	///
	/// Indices are only handed out by this tree, so out-of-range access is
	/// a programming error and panics.
	pub fn node(&self, index: NodeIndex) -> &TemplateNode {
		&self.nodes[index]
	}

	/// Looks up the node index registered for an id.
	pub fn lookup(&self, id: &GroupId) -> Option<NodeIndex> {
		self.all_nodes.get(id).copied()
	}

	/// Number of nodes in the arena.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Iterates over all nodes in creation order.
	pub fn iter(&self) -> impl Iterator<Item = &TemplateNode> {
		self.nodes.iter()
	}

	pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut TemplateNode {
		&mut self.nodes[index]
	}

	/// Allocates a fresh node and registers it in the id index.
	///
	/// A repeated id overwrites the previous index entry; merge semantics
	/// for consecutive repeats are the builder's concern, not this index's.
	pub(crate) fn alloc(&mut self, id: GroupId, parent: Option<NodeIndex>) -> NodeIndex {
		let index = self.nodes.len();
		self.nodes.push(TemplateNode::new(id.clone(), parent));
		self.all_nodes.insert(id, index);
		index
	}

	/// Links `child` under `parent`, preserving link order.
	///
	/// No-op if a child with the same id is already linked, or if parent
	/// and child are the same slot (a self-link would make the structure
	/// cyclic and generation unbounded).
	pub(crate) fn link_child(&mut self, parent: NodeIndex, child: NodeIndex) {
		if parent == child {
			return;
		}
		let child_id = self.nodes[child].id().clone();
		if self.nodes[parent].has_child_id(&child_id) {
			return;
		}
		self.nodes[parent].add_child(child, child_id);
	}
}
