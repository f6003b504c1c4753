use super::node::NodeIndex;
use super::record::{GroupId, GroupRecord};
use super::tree::TemplateTree;
use crate::error::TemplateError;

/// Builds a `TemplateTree` from an ordered, flat record sequence.
///
/// # Responsibilities
/// - Treat the first record as the root declaration
/// - Merge consecutive same-id records onto one node
/// - Link each node under the currently open parent, suppressing
///   duplicate links
/// - Switch the open parent on children-declaring records
/// - Validate declared children against actually-linked children
///
/// # Invariants
/// - Construction is a single pass; the returned tree is complete and
///   read-only, or construction failed and no tree exists.
/// - Child link order follows scan order, which later governs generation
///   iteration order.
pub struct TemplateTreeBuilder;

impl TemplateTreeBuilder {
	/// Builds the entire tree from the record sequence.
	///
	/// # Behavior
	/// - The first record becomes the root; a `content` field on it is
	///   appended immediately.
	/// - For every following record, the node is the previous node when
	///   the ids match (accumulating alternatives), otherwise a fresh
	///   node under the currently open parent.
	/// - A `content` record appends its text and links the node; a
	///   `children` record links the node and makes it the open parent
	///   for the records that follow.
	/// - After the scan, every declared child id must have been linked
	///   under its declaring node.
	///
	/// # Errors
	/// Returns `MalformedInput` if the sequence is empty, a record carries
	/// neither `content` nor `children`, or a declared child id never
	/// appeared as a subsequent record. No partial tree is returned.
	pub fn build(records: &[GroupRecord]) -> Result<TemplateTree, TemplateError> {
		let root_record = records.first().ok_or_else(|| TemplateError::MalformedInput {
			reason: "empty record sequence".to_owned(),
		})?;
		Self::check_record(root_record)?;

		let mut tree = TemplateTree::new(root_record.group_id.clone());
		let root = tree.root();

		if let Some(content) = &root_record.content {
			tree.node_mut(root).add_content(content);
		}

		// Declared child lists, kept for the post-scan validation.
		let mut declared: Vec<(NodeIndex, Vec<GroupId>)> = Vec::new();
		if let Some(ids) = &root_record.children {
			declared.push((root, ids.clone()));
		}

		let mut current_parent = root;
		let mut previous_node = root;

		for record in &records[1..] {
			Self::check_record(record)?;

			// Reuse the previous node on a repeated id, so consecutive
			// records accumulate alternatives onto one node.
			let current_node = if record.group_id == *tree.node(previous_node).id() {
				previous_node
			} else {
				tree.alloc(record.group_id.clone(), Some(current_parent))
			};

			if let Some(content) = &record.content {
				tree.node_mut(current_node).add_content(content);
				tree.link_child(current_parent, current_node);
			}

			if let Some(ids) = &record.children {
				tree.link_child(current_parent, current_node);
				declared.push((current_node, ids.clone()));
				current_parent = current_node;
			}

			previous_node = current_node;
		}

		Self::check_declared_children(&tree, &declared)?;

		Ok(tree)
	}

	/// Rejects a record carrying neither `content` nor `children`.
	fn check_record(record: &GroupRecord) -> Result<(), TemplateError> {
		if record.content.is_none() && record.children.is_none() {
			return Err(TemplateError::MalformedInput {
				reason: format!(
					"record for group {} carries neither content nor children",
					record.group_id
				),
			});
		}
		Ok(())
	}

	/// Validates every declared child id against the links made during
	/// the scan. A declared id that never appeared is a dangling
	/// reference.
	fn check_declared_children(
		tree: &TemplateTree,
		declared: &[(NodeIndex, Vec<GroupId>)],
	) -> Result<(), TemplateError> {
		for (index, ids) in declared {
			let node = tree.node(*index);
			for id in ids {
				if !node.has_child_id(id) {
					return Err(TemplateError::MalformedInput {
						reason: format!(
							"group {} declares child {} that never appears",
							node.id(),
							id
						),
					});
				}
			}
		}
		Ok(())
	}
}
