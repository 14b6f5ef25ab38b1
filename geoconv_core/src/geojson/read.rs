use super::{DepthGuard, json_kind, nesting_depth, type_member};
use crate::{GeoCollection, GeoFeature, GeoJson, GeoJsonError, GeoValue, Geometry, ReadOptions, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::io::Read;

/// Reads GeoJSON with a fixed set of [`ReadOptions`].
///
/// The `parse_*` functions of this module use a reader with default options; construct one
/// yourself for strict property handling or a different depth limit.
#[derive(Clone, Debug, Default)]
pub struct GeoJsonReader {
	options: ReadOptions,
}

impl GeoJsonReader {
	pub fn new(options: ReadOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ReadOptions {
		&self.options
	}

	fn depth(&self) -> DepthGuard {
		DepthGuard::new(self.options.max_depth)
	}

	/// Dispatches on the top-level `type` member.
	///
	/// A JSON `null` document yields [`GeoJson::Empty`]. Any other non-object fails with
	/// [`GeoJsonError::TypeMismatch`], an object with a missing or unknown `type` with
	/// [`GeoJsonError::UnsupportedTopLevelType`].
	pub fn read(&self, json: &JsonValue) -> Result<GeoJson> {
		let object = match json {
			JsonValue::Null => return Ok(GeoJson::Empty),
			JsonValue::Object(object) => object,
			other => {
				return Err(GeoJsonError::type_mismatch(
					"GeoJSON document",
					"an object or null",
					json_kind(other),
				));
			}
		};

		match type_member(object) {
			Ok(Some("FeatureCollection")) => Ok(GeoJson::FeatureCollection(GeoCollection::read_json_object(
				object,
				&self.options,
				self.depth(),
			)?)),
			Ok(Some("Feature")) => Ok(GeoJson::Feature(GeoFeature::read_json(json, &self.options, self.depth())?)),
			Ok(Some(name)) if Geometry::is_type_name(name) => {
				Ok(GeoJson::Geometry(Geometry::read_json_object(object, self.depth())?))
			}
			Ok(Some(name)) => Err(GeoJsonError::UnsupportedTopLevelType(name.to_string())),
			Ok(None) => Err(GeoJsonError::UnsupportedTopLevelType("<missing>".to_string())),
			Err(kind) => Err(GeoJsonError::UnsupportedTopLevelType(format!("<{kind}>"))),
		}
	}

	/// Reads a document that must be a geometry.
	///
	/// Unlike [`GeoJsonReader::read`], an unknown `type` is reported as
	/// [`GeoJsonError::UnsupportedGeometryType`].
	pub fn read_geometry(&self, json: &JsonValue) -> Result<Geometry> {
		let Some(object) = json.as_object() else {
			return Err(GeoJsonError::type_mismatch("GeoJSON document", "a geometry", json_kind(json)));
		};
		match type_member(object) {
			Ok(Some(name @ ("Feature" | "FeatureCollection"))) => {
				Err(GeoJsonError::type_mismatch("GeoJSON document", "a geometry", name))
			}
			_ => Geometry::read_json_object(object, self.depth()),
		}
	}

	/// Reads a document that must be a `Feature`.
	pub fn read_feature(&self, json: &JsonValue) -> Result<GeoFeature> {
		match self.read(json)? {
			GeoJson::Feature(feature) => Ok(feature),
			other => Err(GeoJsonError::type_mismatch(
				"GeoJSON document",
				"a Feature",
				other.type_name(),
			)),
		}
	}

	/// Reads a document that must be a `FeatureCollection`.
	pub fn read_feature_collection(&self, json: &JsonValue) -> Result<GeoCollection> {
		match self.read(json)? {
			GeoJson::FeatureCollection(collection) => Ok(collection),
			other => Err(GeoJsonError::type_mismatch(
				"GeoJSON document",
				"a FeatureCollection",
				other.type_name(),
			)),
		}
	}

	/// Reads a document held in a [`GeoValue`]. A string value is parsed as GeoJSON text.
	///
	/// Values nested deeper than the depth limit fail with [`GeoJsonError::DepthLimitExceeded`].
	pub fn read_value(&self, value: &GeoValue) -> Result<GeoJson> {
		match value {
			GeoValue::String(text) => self.parse_str(text),
			other => {
				let json = other.to_json_bounded(DepthGuard::for_raw_nesting(self.options.max_depth))?;
				self.read(&json)
			}
		}
	}

	/// Parses GeoJSON text.
	pub fn parse_str(&self, text: &str) -> Result<GeoJson> {
		let geojson = self.read(&self.parse_json(text.as_bytes())?)?;
		log::debug!("parsed {} from {} bytes of GeoJSON", geojson.type_name(), text.len());
		Ok(geojson)
	}

	/// Parses GeoJSON text from a reader. The whole document is read before conversion starts.
	pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<GeoJson> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		let geojson = self.read(&self.parse_json(&bytes)?)?;
		log::debug!("parsed {} from {} bytes read", geojson.type_name(), bytes.len());
		Ok(geojson)
	}

	pub fn parse_geometry(&self, text: &str) -> Result<Geometry> {
		self.read_geometry(&self.parse_json(text.as_bytes())?)
	}

	pub fn parse_feature(&self, text: &str) -> Result<GeoFeature> {
		self.read_feature(&self.parse_json(text.as_bytes())?)
	}

	pub fn parse_feature_collection(&self, text: &str) -> Result<GeoCollection> {
		self.read_feature_collection(&self.parse_json(text.as_bytes())?)
	}

	/// Builds the JSON tree, with the configured depth limit taking the place of the parser's own
	/// recursion limit.
	fn parse_json(&self, bytes: &[u8]) -> Result<JsonValue> {
		if !DepthGuard::allows_raw_nesting(self.options.max_depth, nesting_depth(bytes)) {
			return Err(GeoJsonError::DepthLimitExceeded(self.options.max_depth));
		}
		let mut deserializer = serde_json::Deserializer::from_slice(bytes);
		deserializer.disable_recursion_limit();
		let json = JsonValue::deserialize(&mut deserializer)?;
		deserializer.end()?;
		Ok(json)
	}
}
