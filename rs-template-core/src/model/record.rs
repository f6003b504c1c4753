use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TemplateError;

/// Opaque identifier of a content group.
///
/// Identifiers are either integers or strings, hashable, and unique among
/// sibling-distinguishing keys. The same id may appear in several input
/// records; the builder merges those records onto one node.
///
/// The serde representation is untagged, so JSON `154` and `"subject"`
/// both deserialize directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum GroupId {
	Number(i64),
	Name(String),
}

impl fmt::Display for GroupId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GroupId::Number(n) => write!(f, "{}", n),
			GroupId::Name(s) => write!(f, "{}", s),
		}
	}
}

impl From<i64> for GroupId {
	fn from(value: i64) -> Self {
		GroupId::Number(value)
	}
}

impl From<&str> for GroupId {
	fn from(value: &str) -> Self {
		GroupId::Name(value.to_owned())
	}
}

impl From<String> for GroupId {
	fn from(value: String) -> Self {
		GroupId::Name(value)
	}
}

/// One flat grouping record of the input sequence.
///
/// A record either attaches a literal `content` alternative to its group or
/// declares that the following records populate the group's `children`.
/// Well-formed input carries exactly one of the two fields per record; the
/// first record of a sequence always declares the root group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupRecord {
	/// Identifier of the group this record belongs to.
	pub group_id: GroupId,

	/// A literal text alternative for this group.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,

	/// Declared ids of forthcoming child groups.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub children: Option<Vec<GroupId>>,
}

impl GroupRecord {
	/// Creates a record carrying one content alternative.
	pub fn content(group_id: impl Into<GroupId>, content: &str) -> Self {
		Self {
			group_id: group_id.into(),
			content: Some(content.to_owned()),
			children: None,
		}
	}

	/// Creates a record declaring the group's forthcoming children.
	pub fn children(group_id: impl Into<GroupId>, children: Vec<GroupId>) -> Self {
		Self {
			group_id: group_id.into(),
			content: None,
			children: Some(children),
		}
	}

	/// Builds a record from an untyped JSON mapping.
	///
	/// This is the ingestion path for callers holding loosely-typed data.
	/// The typed constructors make these checks unnecessary; here they are
	/// enforced at runtime.
	///
	/// # Errors
	/// - `MalformedInput` if the value is not a mapping, or the `group_id`
	///   key is missing or is neither an integer nor a string.
	/// - `TypeMismatch` if `content` is present but not a string, or
	///   `children` is present but not a list of identifiers.
	pub fn from_value(value: &Value) -> Result<Self, TemplateError> {
		let mapping = value.as_object().ok_or_else(|| TemplateError::MalformedInput {
			reason: format!("record must be a mapping, found {}", json_type_name(value)),
		})?;

		let group_id = match mapping.get("group_id") {
			Some(id) => id_from_value(id).ok_or_else(|| TemplateError::MalformedInput {
				reason: format!("group_id must be an integer or a string, found {}", json_type_name(id)),
			})?,
			None => {
				return Err(TemplateError::MalformedInput {
					reason: "record is missing the group_id key".to_owned(),
				});
			}
		};

		let content = match mapping.get("content") {
			Some(Value::String(s)) => Some(s.to_owned()),
			Some(other) => {
				return Err(TemplateError::TypeMismatch {
					expected: "string content",
					found: json_type_name(other).to_owned(),
				});
			}
			None => None,
		};

		let children = match mapping.get("children") {
			Some(Value::Array(items)) => {
				let mut ids = Vec::with_capacity(items.len());
				for item in items {
					let id = id_from_value(item).ok_or_else(|| TemplateError::TypeMismatch {
						expected: "integer or string child id",
						found: json_type_name(item).to_owned(),
					})?;
					ids.push(id);
				}
				Some(ids)
			}
			Some(other) => {
				return Err(TemplateError::TypeMismatch {
					expected: "list of child ids",
					found: json_type_name(other).to_owned(),
				});
			}
			None => None,
		};

		Ok(Self { group_id, content, children })
	}
}

/// Parses an ordered record sequence from a JSON array of mappings.
///
/// Each element goes through `GroupRecord::from_value`, so type violations
/// surface as `TypeMismatch` rather than opaque serde errors.
///
/// # Errors
/// Returns `MalformedInput` if the text is not valid JSON or not an array.
pub fn parse_records(json: &str) -> Result<Vec<GroupRecord>, TemplateError> {
	let value: Value = serde_json::from_str(json).map_err(|e| TemplateError::MalformedInput {
		reason: format!("invalid JSON: {}", e),
	})?;

	let items = value.as_array().ok_or_else(|| TemplateError::MalformedInput {
		reason: format!("records must be a JSON array, found {}", json_type_name(&value)),
	})?;

	items.iter().map(GroupRecord::from_value).collect()
}

/// Converts a JSON value to a `GroupId` if it is an integer or a string.
fn id_from_value(value: &Value) -> Option<GroupId> {
	match value {
		Value::Number(n) => n.as_i64().map(GroupId::Number),
		Value::String(s) => Some(GroupId::Name(s.to_owned())),
		_ => None,
	}
}

/// Human-readable JSON type name, for error messages.
fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "mapping",
	}
}
