use super::GeoValue;
use crate::geojson::json_kind;
use crate::{GeoJsonError, Result};
use serde_json::Value as JsonValue;
use std::fmt::Display;

/// The value of a feature's `id` member: a string or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoIdentifier {
	Double(f64),
	Int(i64),
	String(String),
	UInt(u64),
}

impl GeoIdentifier {
	/// Reads an identifier, applying the same number rules as [`GeoValue::from_json`].
	///
	/// Fails with [`GeoJsonError::InvalidIdentifier`] for anything other than a string or a number.
	pub fn from_json(json: &JsonValue) -> Result<GeoIdentifier> {
		match json {
			JsonValue::String(s) => Ok(GeoIdentifier::String(s.clone())),
			JsonValue::Number(n) => Ok(if let Some(v) = n.as_u64() {
				GeoIdentifier::UInt(v)
			} else if let Some(v) = n.as_i64() {
				GeoIdentifier::Int(v)
			} else {
				GeoIdentifier::Double(n.as_f64().unwrap_or(f64::NAN))
			}),
			other => Err(GeoJsonError::InvalidIdentifier(json_kind(other))),
		}
	}

	/// Converts the identifier back into JSON.
	///
	/// A non-finite [`GeoIdentifier::Double`] has no JSON representation and is written as
	/// `null`, which [`GeoIdentifier::from_json`] rejects. This is the same lossy boundary as in
	/// [`GeoValue::to_json`].
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoIdentifier::Double(v) => JsonValue::from(*v),
			GeoIdentifier::Int(v) => JsonValue::from(*v),
			GeoIdentifier::String(v) => JsonValue::String(v.clone()),
			GeoIdentifier::UInt(v) => JsonValue::from(*v),
		}
	}
}

impl Display for GeoIdentifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoIdentifier::Double(v) => write!(f, "{v}"),
			GeoIdentifier::Int(v) => write!(f, "{v}"),
			GeoIdentifier::String(v) => f.write_str(v),
			GeoIdentifier::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoIdentifier {
	fn from(value: &str) -> Self {
		GeoIdentifier::String(value.to_string())
	}
}

impl From<String> for GeoIdentifier {
	fn from(value: String) -> Self {
		GeoIdentifier::String(value)
	}
}

impl From<u64> for GeoIdentifier {
	fn from(value: u64) -> Self {
		GeoIdentifier::UInt(value)
	}
}

impl From<i64> for GeoIdentifier {
	fn from(value: i64) -> Self {
		GeoIdentifier::Int(value)
	}
}

impl From<f64> for GeoIdentifier {
	fn from(value: f64) -> Self {
		GeoIdentifier::Double(value)
	}
}

impl From<GeoIdentifier> for GeoValue {
	fn from(value: GeoIdentifier) -> Self {
		match value {
			GeoIdentifier::Double(v) => GeoValue::Double(v),
			GeoIdentifier::Int(v) => GeoValue::Int(v),
			GeoIdentifier::String(v) => GeoValue::String(v),
			GeoIdentifier::UInt(v) => GeoValue::UInt(v),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(1234), GeoIdentifier::UInt(1234))]
	#[case(json!(-7), GeoIdentifier::Int(-7))]
	#[case(json!(1.5), GeoIdentifier::Double(1.5))]
	#[case(json!("abcd"), GeoIdentifier::String("abcd".to_string()))]
	fn valid(#[case] json: JsonValue, #[case] expected: GeoIdentifier) {
		let id = GeoIdentifier::from_json(&json).unwrap();
		assert_eq!(id, expected);
		assert_eq!(id.to_json(), json);
	}

	#[rstest]
	#[case(json!(null), "null")]
	#[case(json!(true), "boolean")]
	#[case(json!([1]), "array")]
	#[case(json!({"a": 1}), "object")]
	fn invalid(#[case] json: JsonValue, #[case] kind: &str) {
		let err = GeoIdentifier::from_json(&json).unwrap_err();
		assert!(matches!(err, GeoJsonError::InvalidIdentifier(k) if k == kind));
	}

	#[test]
	fn non_finite_double_is_written_as_null() {
		let json = GeoIdentifier::from(f64::NAN).to_json();
		assert_eq!(json, JsonValue::Null);
		assert!(matches!(
			GeoIdentifier::from_json(&json).unwrap_err(),
			GeoJsonError::InvalidIdentifier("null")
		));
		assert_eq!(GeoIdentifier::from(f64::INFINITY).to_json(), JsonValue::Null);
	}

	#[test]
	fn display() {
		assert_eq!(GeoIdentifier::from("way/12").to_string(), "way/12");
		assert_eq!(GeoIdentifier::from(12u64).to_string(), "12");
		assert_eq!(GeoIdentifier::from(-12i64).to_string(), "-12");
	}

	#[test]
	fn into_value() {
		assert_eq!(GeoValue::from(GeoIdentifier::from(3u64)), GeoValue::UInt(3));
		assert_eq!(GeoValue::from(GeoIdentifier::from("x")), GeoValue::from("x"));
	}
}
