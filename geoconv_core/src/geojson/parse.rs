//! Shortcuts that read with the default [`ReadOptions`](crate::ReadOptions).

use super::GeoJsonReader;
use crate::{GeoCollection, GeoFeature, GeoJson, Geometry, Result};
use std::io::Read;

/// Parses a GeoJSON document of any kind.
pub fn parse_geojson(text: &str) -> Result<GeoJson> {
	GeoJsonReader::default().parse_str(text)
}

/// Parses a GeoJSON document of any kind from a reader.
pub fn parse_geojson_reader<R: Read>(reader: R) -> Result<GeoJson> {
	GeoJsonReader::default().parse_reader(reader)
}

/// Parses a document that must be a geometry.
pub fn parse_geometry(text: &str) -> Result<Geometry> {
	GeoJsonReader::default().parse_geometry(text)
}

/// Parses a document that must be a `Feature`.
pub fn parse_feature(text: &str) -> Result<GeoFeature> {
	GeoJsonReader::default().parse_feature(text)
}

/// Parses a document that must be a `FeatureCollection`.
pub fn parse_feature_collection(text: &str) -> Result<GeoCollection> {
	GeoJsonReader::default().parse_feature_collection(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoJsonError, GeoValue, ToGeoJson};
	use pretty_assertions::assert_eq;

	#[test]
	fn circle_is_not_a_geometry() {
		let err = parse_geometry(r#"{"type":"Circle","coordinates":[0,0],"radius":5}"#).unwrap_err();
		assert!(matches!(err, GeoJsonError::UnsupportedGeometryType(ref name) if name == "Circle"));
	}

	#[test]
	fn feature_ids_keep_their_kind() {
		let text = r#"{"type":"FeatureCollection","features":[{"type":"Feature","id":1234,"geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{}},{"type":"Feature","id":"abcd","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{}}]}"#;
		let collection = parse_feature_collection(text).unwrap();
		assert_eq!(collection.to_json_string(), text);
		assert_eq!(GeoValue::from(collection.features[0].id.clone().unwrap()), GeoValue::UInt(1234));
	}

	#[test]
	fn reader_and_text_agree() {
		let text = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{"a":-3}}"#;
		assert_eq!(parse_geojson(text).unwrap(), parse_geojson_reader(text.as_bytes()).unwrap());
		assert_eq!(parse_feature(text).unwrap().properties.get("a"), Some(&GeoValue::Int(-3)));
	}
}
