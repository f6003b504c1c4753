use thiserror::Error;

use crate::model::record::GroupId;

/// Error taxonomy for tree construction and template generation.
///
/// Every error is unrecoverable at the point it is raised: a failed build
/// returns no tree, and a failed generation returns no output. There is no
/// retry or partial-result fallback, so a malformed build can never produce
/// a usable-but-wrong tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
	/// The input record sequence cannot produce a tree.
	///
	/// Raised when the sequence is empty, when a record carries neither
	/// `content` nor `children`, when an untyped record carries a
	/// `group_id` that is not an integer or a string, or when a declared
	/// child id never appears as a subsequent record (dangling reference).
	#[error("Malformed input: {reason}")]
	MalformedInput { reason: String },

	/// A value of the wrong type was found where another was required.
	///
	/// Only reachable through untyped record ingestion (`from_value`),
	/// e.g. a numeric `content` or a `children` entry that is neither an
	/// integer nor a string. The typed record path makes these
	/// mismatches unrepresentable.
	#[error("Type mismatch: expected {expected}, found {found}")]
	TypeMismatch { expected: &'static str, found: String },

	/// The generator was asked to start from an id absent from the tree.
	#[error("Unknown identifier: {0}")]
	UnknownIdentifier(GroupId),

	/// A threshold outside the valid `[0.0, 1.0]` range was supplied.
	#[error("Threshold must be between 0.0 and 1.0, got {0}")]
	InvalidThreshold(f32),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
