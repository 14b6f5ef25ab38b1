//! Small helpers for inspecting `serde_json` trees.

use crate::{GeoJsonError, Result};
use serde_json::{Map, Value as JsonValue};

/// Return the JSON kind as a lowercase string (`"array"`, `"object"`, etc.).
pub(crate) fn json_kind(json: &JsonValue) -> &'static str {
	match json {
		JsonValue::Array(_) => "array",
		JsonValue::Bool(_) => "boolean",
		JsonValue::Null => "null",
		JsonValue::Number(_) => "number",
		JsonValue::Object(_) => "object",
		JsonValue::String(_) => "string",
	}
}

/// Look up the `type` member of an object.
///
/// Returns `Ok(None)` if the member is absent and the found kind as error text if it is not a
/// string, leaving the choice of error variant to the caller.
pub(crate) fn type_member(object: &Map<String, JsonValue>) -> std::result::Result<Option<&str>, &'static str> {
	match object.get("type") {
		None => Ok(None),
		Some(JsonValue::String(name)) => Ok(Some(name)),
		Some(other) => Err(json_kind(other)),
	}
}

/// Measure the deepest nesting of arrays and objects in JSON text without building a tree.
///
/// Brackets inside strings are skipped. The text is not validated; malformed input yields some
/// depth and is rejected later by the parser.
pub(crate) fn nesting_depth(bytes: &[u8]) -> usize {
	let mut depth = 0usize;
	let mut deepest = 0usize;
	let mut in_string = false;
	let mut escaped = false;
	for &byte in bytes {
		if in_string {
			if escaped {
				escaped = false;
			} else if byte == b'\\' {
				escaped = true;
			} else if byte == b'"' {
				in_string = false;
			}
			continue;
		}
		match byte {
			b'"' => in_string = true,
			b'[' | b'{' => {
				depth += 1;
				deepest = deepest.max(depth);
			}
			b']' | b'}' => depth = depth.saturating_sub(1),
			_ => {}
		}
	}
	deepest
}

/// Borrow a member that must be an array.
pub(crate) fn array_member<'a>(
	object: &'a Map<String, JsonValue>,
	owner: &'static str,
	field: &'static str,
	context: &'static str,
) -> Result<&'a Vec<JsonValue>> {
	match object.get(field) {
		None => Err(GeoJsonError::MissingField { object: owner, field }),
		Some(JsonValue::Array(array)) => Ok(array),
		Some(other) => Err(GeoJsonError::type_mismatch(context, "an array", json_kind(other))),
	}
}
