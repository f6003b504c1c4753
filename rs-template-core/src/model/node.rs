use super::record::GroupId;

/// Index of a node in the tree arena.
pub type NodeIndex = usize;

/// A single group of the template hierarchy.
///
/// A node carries zero or more literal content alternatives and zero or
/// more exclusively-owned children. Both may be non-empty at once (a mixed
/// node); the generator then chooses between them probabilistically.
///
/// # Invariants
/// - `children_ids` mirrors `children` positionally: same length, and the
///   id at position `i` is the id of the node at `children[i]`.
/// - `parent` is bookkeeping only (insertion context during construction);
///   generation never traverses it.
#[derive(Clone, Debug)]
pub struct TemplateNode {
	/// Identifier of the group this node represents.
	id: GroupId,
	/// Node under which this one was created. Not used for traversal.
	parent: Option<NodeIndex>,
	/// Literal text alternatives, in insertion order.
	contents: Vec<String>,
	/// Child nodes, in link order. Link order governs generation order.
	children: Vec<NodeIndex>,
	/// Positional mirror of `children`, used for duplicate-link checks.
	children_ids: Vec<GroupId>,
}

impl TemplateNode {
	pub(crate) fn new(id: GroupId, parent: Option<NodeIndex>) -> Self {
		Self {
			id,
			parent,
			contents: Vec::new(),
			children: Vec::new(),
			children_ids: Vec::new(),
		}
	}

	/// Returns the identifier of this node's group.
	pub fn id(&self) -> &GroupId {
		&self.id
	}

	/// Returns the bookkeeping parent reference, if any.
	pub fn parent(&self) -> Option<NodeIndex> {
		self.parent
	}

	/// Returns the content alternatives attached to this node.
	pub fn contents(&self) -> &[String] {
		&self.contents
	}

	/// Returns the child nodes in link order.
	pub fn children(&self) -> &[NodeIndex] {
		&self.children
	}

	/// Returns the child ids, positionally matching `children`.
	pub fn children_ids(&self) -> &[GroupId] {
		&self.children_ids
	}

	pub fn has_contents(&self) -> bool {
		!self.contents.is_empty()
	}

	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Appends one content alternative.
	pub(crate) fn add_content(&mut self, content: &str) {
		self.contents.push(content.to_owned());
	}

	/// Whether a child with the given id is already linked.
	pub(crate) fn has_child_id(&self, id: &GroupId) -> bool {
		self.children_ids.contains(id)
	}

	/// Links a child, keeping `children` and `children_ids` in step.
	///
	/// The caller is responsible for the duplicate check (`has_child_id`).
	pub(crate) fn add_child(&mut self, child: NodeIndex, child_id: GroupId) {
		self.children.push(child);
		self.children_ids.push(child_id);
	}
}
