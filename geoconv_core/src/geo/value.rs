use crate::geojson::{DepthGuard, json_kind};
use crate::{GeoJsonError, Result};
use serde_json::{Number, Value as JsonValue};
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// Mapping used by [`GeoValue::Object`].
pub type GeoObject = BTreeMap<String, GeoValue>;

/// A dynamically typed value, able to hold anything a JSON document can.
///
/// Numbers keep the distinction between unsigned, signed and floating point representations, so
/// that `10`, `-10` and `10.0` survive a round trip through JSON text unchanged.
#[derive(Clone, Default, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	#[default]
	Null,
	Object(GeoObject),
	String(String),
	UInt(u64),
}

impl GeoValue {
	/// Converts a JSON tree into a value.
	///
	/// Numbers are mapped to the narrowest faithful representation: [`GeoValue::UInt`] if the
	/// number is a non-negative integer within `u64`, [`GeoValue::Int`] if it is a negative integer
	/// within `i64`, [`GeoValue::Double`] otherwise.
	///
	/// The conversion recurses once per nesting level and has no depth limit. Trees produced by
	/// the crate's own text parsing are already bounded; use [`GeoJsonReader`](crate::GeoJsonReader)
	/// for trees from untrusted sources.
	pub fn from_json(json: &JsonValue) -> GeoValue {
		match json {
			JsonValue::Null => GeoValue::Null,
			JsonValue::Bool(b) => GeoValue::Bool(*b),
			JsonValue::Number(n) => GeoValue::from_json_number(n),
			JsonValue::String(s) => GeoValue::String(s.clone()),
			JsonValue::Array(array) => GeoValue::Array(array.iter().map(GeoValue::from_json).collect()),
			JsonValue::Object(object) => GeoValue::Object(
				object
					.iter()
					.map(|(key, value)| (key.clone(), GeoValue::from_json(value)))
					.collect(),
			),
		}
	}

	/// Same as [`GeoValue::from_json`], but refuses to descend deeper than `depth` allows.
	pub(crate) fn read_json(json: &JsonValue, depth: DepthGuard) -> Result<GeoValue> {
		Ok(match json {
			JsonValue::Array(array) => {
				let depth = depth.descend()?;
				let mut list = Vec::with_capacity(array.len());
				for item in array {
					list.push(GeoValue::read_json(item, depth)?);
				}
				GeoValue::Array(list)
			}
			JsonValue::Object(object) => GeoValue::Object(read_json_object(object, depth)?),
			scalar => GeoValue::from_json(scalar),
		})
	}

	pub(crate) fn from_json_number(number: &Number) -> GeoValue {
		if let Some(v) = number.as_u64() {
			GeoValue::UInt(v)
		} else if let Some(v) = number.as_i64() {
			GeoValue::Int(v)
		} else {
			// Every `Number` without arbitrary precision is one of the three.
			GeoValue::Double(number.as_f64().unwrap_or(f64::NAN))
		}
	}

	/// Converts the value back into a JSON tree.
	///
	/// Non-finite doubles have no JSON representation and are written as `null`. Like
	/// [`GeoValue::from_json`], this recurses without a depth limit.
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoValue::Array(list) => JsonValue::Array(list.iter().map(GeoValue::to_json).collect()),
			GeoValue::Bool(v) => JsonValue::Bool(*v),
			GeoValue::Double(v) => JsonValue::from(*v),
			GeoValue::Int(v) => JsonValue::from(*v),
			GeoValue::Null => JsonValue::Null,
			GeoValue::Object(object) => JsonValue::Object(
				object
					.iter()
					.map(|(key, value)| (key.clone(), value.to_json()))
					.collect(),
			),
			GeoValue::String(v) => JsonValue::String(v.clone()),
			GeoValue::UInt(v) => JsonValue::from(*v),
		}
	}

	/// Same as [`GeoValue::to_json`], but refuses to descend deeper than `depth` allows.
	pub(crate) fn to_json_bounded(&self, depth: DepthGuard) -> Result<JsonValue> {
		Ok(match self {
			GeoValue::Array(list) => {
				let depth = depth.descend()?;
				let mut array = Vec::with_capacity(list.len());
				for item in list {
					array.push(item.to_json_bounded(depth)?);
				}
				JsonValue::Array(array)
			}
			GeoValue::Object(object) => {
				let depth = depth.descend()?;
				let mut map = serde_json::Map::with_capacity(object.len());
				for (key, value) in object {
					map.insert(key.clone(), value.to_json_bounded(depth)?);
				}
				JsonValue::Object(map)
			}
			scalar => scalar.to_json(),
		})
	}

	/// Return the kind as a lowercase string, using the JSON vocabulary.
	pub fn type_as_str(&self) -> &'static str {
		match self {
			GeoValue::Array(_) => "array",
			GeoValue::Bool(_) => "boolean",
			GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_) => "number",
			GeoValue::Null => "null",
			GeoValue::Object(_) => "object",
			GeoValue::String(_) => "string",
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&Vec<GeoValue>> {
		match self {
			GeoValue::Array(list) => Some(list),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&GeoObject> {
		match self {
			GeoValue::Object(object) => Some(object),
			_ => None,
		}
	}
}

pub(crate) fn read_json_object(object: &serde_json::Map<String, JsonValue>, depth: DepthGuard) -> Result<GeoObject> {
	let depth = depth.descend()?;
	let mut map = GeoObject::new();
	for (key, value) in object {
		map.insert(key.clone(), GeoValue::read_json(value, depth)?);
	}
	Ok(map)
}

pub(crate) fn expect_json_object<'a>(
	json: &'a JsonValue,
	context: &'static str,
) -> Result<&'a serde_json::Map<String, JsonValue>> {
	json
		.as_object()
		.ok_or_else(|| GeoJsonError::type_mismatch(context, "an object", json_kind(json)))
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::String(v) => f.write_str(v),
			other => write!(f, "{}", other.to_json()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<u8> for GeoValue {
	fn from(value: u8) -> Self {
		GeoValue::UInt(value as u64)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(value as u64)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<Vec<GeoValue>> for GeoValue {
	fn from(value: Vec<GeoValue>) -> Self {
		GeoValue::Array(value)
	}
}

impl From<GeoObject> for GeoValue {
	fn from(value: GeoObject) -> Self {
		GeoValue::Object(value)
	}
}

impl From<&JsonValue> for GeoValue {
	fn from(value: &JsonValue) -> Self {
		GeoValue::from_json(value)
	}
}

impl From<&GeoValue> for JsonValue {
	fn from(value: &GeoValue) -> Self {
		value.to_json()
	}
}
