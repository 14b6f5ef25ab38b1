use super::{GeoCollection, GeoFeature, GeoValue, Geometry};
use crate::Result;
use crate::geojson::{GeoJsonReader, ToGeoJson};
use serde_json::Value as JsonValue;

/// A complete GeoJSON document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GeoJson {
	/// A JSON `null` document.
	#[default]
	Empty,
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJson {
	/// Reads a JSON tree with the default options.
	pub fn from_json(json: &JsonValue) -> Result<GeoJson> {
		GeoJsonReader::default().read(json)
	}

	/// Reads a document from a dynamically typed value. A [`GeoValue::String`] is parsed as
	/// GeoJSON text; every other value is read as the JSON tree it stands for.
	pub fn from_value(value: &GeoValue) -> Result<GeoJson> {
		GeoJsonReader::default().read_value(value)
	}

	/// Converts the document into a dynamically typed value.
	pub fn to_value(&self) -> GeoValue {
		GeoValue::from_json(&self.to_json())
	}

	/// The GeoJSON `type` of the document, or `"null"` for [`GeoJson::Empty`].
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoJson::Empty => "null",
			GeoJson::Geometry(geometry) => geometry.get_type_name(),
			GeoJson::Feature(_) => "Feature",
			GeoJson::FeatureCollection(_) => "FeatureCollection",
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, GeoJson::Empty)
	}
}

impl ToGeoJson for GeoJson {
	fn to_json(&self) -> JsonValue {
		match self {
			GeoJson::Empty => JsonValue::Null,
			GeoJson::Geometry(geometry) => geometry.to_json(),
			GeoJson::Feature(feature) => feature.to_json(),
			GeoJson::FeatureCollection(collection) => collection.to_json(),
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(geometry: Geometry) -> Self {
		GeoJson::Geometry(geometry)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(feature: GeoFeature) -> Self {
		GeoJson::Feature(feature)
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(collection: GeoCollection) -> Self {
		GeoJson::FeatureCollection(collection)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn empty_writes_null() {
		assert_eq!(GeoJson::Empty.to_json_string(), "null");
		assert_eq!(GeoJson::from_json(&JsonValue::Null).unwrap(), GeoJson::Empty);
		assert!(GeoJson::default().is_empty());
	}

	#[test]
	fn value_round_trip() {
		let geojson = GeoJson::from(GeoFeature::new_example());
		let value = geojson.to_value();
		assert_eq!(value.as_object().unwrap().get("type"), Some(&GeoValue::from("Feature")));
		assert_eq!(GeoJson::from_value(&value).unwrap(), geojson);
	}

	#[test]
	fn value_holding_text() {
		let value = GeoValue::from(r#"{"type":"Point","coordinates":[30.5,50.5]}"#);
		assert_eq!(
			GeoJson::from_value(&value).unwrap(),
			GeoJson::Geometry(Geometry::new_point([30.5, 50.5]))
		);
		assert!(GeoJson::from_value(&GeoValue::from("not json")).unwrap_err().is_syntax());
	}

	#[test]
	fn type_names() {
		assert_eq!(GeoJson::from(Geometry::new_example()).type_name(), "MultiPolygon");
		assert_eq!(GeoJson::from(GeoCollection::default()).type_name(), "FeatureCollection");
		assert_eq!(
			GeoJson::from_json(&json!({"type": "FeatureCollection", "features": []})).unwrap(),
			GeoJson::FeatureCollection(GeoCollection::default())
		);
	}
}
