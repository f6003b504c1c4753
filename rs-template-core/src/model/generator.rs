use rand::Rng;
use rand::seq::IndexedRandom;

use super::builder::TemplateTreeBuilder;
use super::node::NodeIndex;
use super::record::{GroupId, GroupRecord};
use super::tree::TemplateTree;
use crate::error::TemplateError;

/// Probability that a mixed node emits its own content instead of
/// recursing into its children.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Terminal punctuation appended to every generated template.
const DOT: char = '.';

/// Samples text templates from a built `TemplateTree`.
///
/// # Responsibilities
/// - Resolve the starting group id through the tree's lookup index
/// - Walk the tree recursively, choosing content alternatives uniformly
///   at random and arbitrating mixed nodes against the threshold
/// - Trim and terminate the assembled text
///
/// The random source is injected per call, so a seeded generator is fully
/// reproducible and concurrent calls against a shared tree need no
/// coordination.
#[derive(Debug)]
pub struct TemplateGenerator<'a> {
	tree: &'a TemplateTree,
	threshold: f32,
}

impl<'a> TemplateGenerator<'a> {
	/// Creates a generator over a built tree with the default threshold.
	pub fn new(tree: &'a TemplateTree) -> Self {
		Self {
			tree,
			threshold: DEFAULT_THRESHOLD,
		}
	}

	/// Returns the current mixed-node threshold.
	pub fn threshold(&self) -> f32 {
		self.threshold
	}

	/// Sets the mixed-node threshold (0.0..1.0).
	///
	/// At 1.0 a mixed node always emits its own content; at 0.0 it always
	/// recurses into its children.
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_threshold(&mut self, threshold: f32) -> Result<(), TemplateError> {
		if !(0.0..=1.0).contains(&threshold) {
			return Err(TemplateError::InvalidThreshold(threshold));
		}
		self.threshold = threshold;
		Ok(())
	}

	/// Generates one template starting from the given group id.
	///
	/// The result is trimmed and terminated with a single period.
	///
	/// # Errors
	/// Returns `UnknownIdentifier` if the id is absent from the tree.
	pub fn generate<R: Rng>(&self, start_id: &GroupId, rng: &mut R) -> Result<String, TemplateError> {
		let start = self
			.tree
			.lookup(start_id)
			.ok_or_else(|| TemplateError::UnknownIdentifier(start_id.clone()))?;

		let text = self.process_node(start, rng);
		Ok(format!("{}{}", text.trim(), DOT))
	}

	/// Recursive walk assembling the raw (untrimmed) text.
	///
	/// # Behavior
	/// - Contents only: a space plus one uniformly random alternative.
	/// - Children only: concatenation of every child's production, in
	///   link order.
	/// - Both: one uniform draw in [0, 1); below the threshold the node
	///   emits its own content, otherwise it recurses.
	/// - Neither: the empty string (degenerate leaf, never an error).
	///
	/// Depth is bounded by the tree depth; the builder keeps the
	/// structure acyclic, so the walk always terminates.
	fn process_node<R: Rng>(&self, index: NodeIndex, rng: &mut R) -> String {
		let node = self.tree.node(index);
		let mut text = String::new();

		if node.has_contents() && !node.has_children() {
			self.push_content(index, &mut text, rng);
		} else if node.has_children() && !node.has_contents() {
			for &child in node.children() {
				text.push_str(&self.process_node(child, rng));
			}
		} else if node.has_contents() && node.has_children() {
			let draw: f32 = rng.random_range(0.0..1.0);
			if draw < self.threshold {
				self.push_content(index, &mut text, rng);
			} else {
				for &child in node.children() {
					text.push_str(&self.process_node(child, rng));
				}
			}
		}

		text
	}

	/// Appends a space plus one random content alternative of the node.
	fn push_content<R: Rng>(&self, index: NodeIndex, text: &mut String, rng: &mut R) {
		// Callers only reach this with non-empty contents
		if let Some(choice) = self.tree.node(index).contents().choose(rng) {
			text.push(' ');
			text.push_str(choice);
		}
	}
}

/// Builds the tree and generates one template in a single call.
///
/// This is the convenience entry point hiding both internal objects: the
/// default threshold is used and randomness comes from the thread-local
/// generator, so output varies between calls.
///
/// # Errors
/// Propagates builder errors (`MalformedInput`) and generation errors
/// (`UnknownIdentifier`).
pub fn generate_template(
	start_id: impl Into<GroupId>,
	records: &[GroupRecord],
) -> Result<String, TemplateError> {
	generate_template_seeded(start_id, records, DEFAULT_THRESHOLD, &mut rand::rng())
}

/// Builds the tree and generates one template with an explicit threshold
/// and random source.
///
/// Use this variant for reproducible output: a seeded `StdRng` yields the
/// same template sequence on every run.
///
/// # Errors
/// Propagates builder errors, `InvalidThreshold`, and `UnknownIdentifier`.
pub fn generate_template_seeded<R: Rng>(
	start_id: impl Into<GroupId>,
	records: &[GroupRecord],
	threshold: f32,
	rng: &mut R,
) -> Result<String, TemplateError> {
	let tree = TemplateTreeBuilder::build(records)?;
	let mut generator = TemplateGenerator::new(&tree);
	generator.set_threshold(threshold)?;
	generator.generate(&start_id.into(), rng)
}
