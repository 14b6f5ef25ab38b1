//! Options controlling how GeoJSON is read.

use serde::Deserialize;

/// Default limit for nested JSON containers.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How a feature without a `properties` member is handled.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertiesMode {
	/// An absent `properties` member is read as an empty mapping.
	#[default]
	Lenient,
	/// An absent `properties` member is an error. `"properties": null` is still accepted.
	Strict,
}

/// Options for [`GeoJsonReader`](crate::GeoJsonReader).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReadOptions {
	/// Handling of features without a `properties` member.
	pub properties: PropertiesMode,

	/// Maximum number of nested JSON arrays and objects the reader descends into.
	///
	/// This limit replaces the JSON parser's own recursion limit, so very large values allow
	/// input deep enough to exhaust the stack.
	pub max_depth: usize,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			properties: PropertiesMode::Lenient,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl ReadOptions {
	#[must_use]
	pub fn strict() -> Self {
		Self {
			properties: PropertiesMode::Strict,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn defaults() {
		let options = ReadOptions::default();
		assert_eq!(options.properties, PropertiesMode::Lenient);
		assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
	}

	#[test]
	fn deserialize_partial() {
		let options: ReadOptions = serde_json::from_str(r#"{"properties":"strict"}"#).unwrap();
		assert_eq!(options, ReadOptions::strict());

		let options: ReadOptions = serde_json::from_str(r#"{"max_depth":4}"#).unwrap();
		assert_eq!(options, ReadOptions::default().with_max_depth(4));
	}

	#[test]
	fn deserialize_rejects_unknown_fields() {
		assert!(serde_json::from_str::<ReadOptions>(r#"{"precision":3}"#).is_err());
	}
}
