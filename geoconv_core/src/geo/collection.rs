use super::GeoFeature;
use crate::geojson::{DepthGuard, ToGeoJson, json_kind, type_member};
use crate::{GeoJsonError, ReadOptions, Result};
use serde_json::{Map, Value as JsonValue};

/// An ordered list of features, written as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Reads a GeoJSON `FeatureCollection` object using the default [`ReadOptions`].
	pub fn from_json(json: &JsonValue) -> Result<GeoCollection> {
		let options = ReadOptions::default();
		let depth = DepthGuard::new(options.max_depth);
		let object = json
			.as_object()
			.ok_or_else(|| GeoJsonError::type_mismatch("FeatureCollection", "an object", json_kind(json)))?;
		match type_member(object) {
			Ok(Some("FeatureCollection")) => GeoCollection::read_json_object(object, &options, depth),
			Ok(Some(other)) => Err(GeoJsonError::type_mismatch(
				"GeoJSON document",
				"a FeatureCollection",
				other,
			)),
			Ok(None) => Err(GeoJsonError::MissingField {
				object: "FeatureCollection",
				field: "type",
			}),
			Err(kind) => Err(GeoJsonError::type_mismatch("FeatureCollection 'type'", "a string", kind)),
		}
	}

	/// Reads the `features` member of a `FeatureCollection` object whose `type` was already checked.
	pub(crate) fn read_json_object(
		object: &Map<String, JsonValue>,
		options: &ReadOptions,
		depth: DepthGuard,
	) -> Result<GeoCollection> {
		let features = crate::geojson::array_member(
			object,
			"FeatureCollection",
			"features",
			"FeatureCollection 'features'",
		)?;
		GeoCollection::read_features(features, options, depth.descend()?)
	}

	/// Reads each element of a JSON array as a feature, preserving order.
	pub(crate) fn read_features(features: &[JsonValue], options: &ReadOptions, depth: DepthGuard) -> Result<GeoCollection> {
		let depth = depth.descend()?;
		let mut list = Vec::with_capacity(features.len());
		for (index, feature) in features.iter().enumerate() {
			log::trace!("reading feature {index}");
			list.push(GeoFeature::read_json(feature, options, depth)?);
		}
		Ok(GeoCollection { features: list })
	}

	/// Reads a JSON array of features. Fails with [`GeoJsonError::TypeMismatch`] if `json` is not
	/// an array.
	pub fn from_json_features(json: &JsonValue) -> Result<GeoCollection> {
		let options = ReadOptions::default();
		let features = json
			.as_array()
			.ok_or_else(|| GeoJsonError::type_mismatch("a feature list", "an array", json_kind(json)))?;
		GeoCollection::read_features(features, &options, DepthGuard::new(options.max_depth))
	}
}

impl ToGeoJson for GeoCollection {
	fn to_json(&self) -> JsonValue {
		let mut object = Map::with_capacity(2);
		object.insert("type".to_string(), JsonValue::from("FeatureCollection"));
		object.insert(
			"features".to_string(),
			JsonValue::Array(self.features.iter().map(GeoFeature::to_json).collect()),
		);
		JsonValue::Object(object)
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		GeoCollection {
			features: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoIdentifier, Geometry};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn feature(id: JsonValue) -> JsonValue {
		json!({"type": "Feature", "id": id, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}, "properties": {}})
	}

	#[test]
	fn read_collection() {
		let collection = GeoCollection::from_json(&json!({
			"type": "FeatureCollection",
			"features": [feature(json!(1234)), feature(json!("abcd"))]
		}))
		.unwrap();
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.features[0].id, Some(GeoIdentifier::UInt(1234)));
		assert_eq!(collection.features[1].id, Some(GeoIdentifier::from("abcd")));
	}

	#[test]
	fn empty_collection() {
		let collection = GeoCollection::from_json(&json!({"type": "FeatureCollection", "features": []})).unwrap();
		assert!(collection.is_empty());
		assert_eq!(collection.to_json_string(), r#"{"type":"FeatureCollection","features":[]}"#);
	}

	#[test]
	fn features_must_be_an_array() {
		let err = GeoCollection::from_json(&json!({"type": "FeatureCollection", "features": {}})).unwrap_err();
		assert!(matches!(err, GeoJsonError::TypeMismatch { .. }));

		let err = GeoCollection::from_json(&json!({"type": "FeatureCollection"})).unwrap_err();
		assert!(matches!(
			err,
			GeoJsonError::MissingField {
				field: "features",
				..
			}
		));
	}

	#[test]
	fn wrong_document_type() {
		let err = GeoCollection::from_json(&json!({"type": "Feature", "features": []})).unwrap_err();
		assert_eq!(
			err.to_string(),
			"GeoJSON document must be a FeatureCollection, found Feature"
		);
	}

	#[test]
	fn feature_list() {
		let collection = GeoCollection::from_json_features(&json!([feature(json!(1)), feature(json!(2))])).unwrap();
		assert_eq!(collection.len(), 2);

		let err = GeoCollection::from_json_features(&json!({})).unwrap_err();
		assert!(matches!(err, GeoJsonError::TypeMismatch { .. }));
	}

	#[test]
	fn first_invalid_feature_fails_the_collection() {
		let err = GeoCollection::from_json_features(&json!([feature(json!(1)), {"type": "Feature"}])).unwrap_err();
		assert!(matches!(
			err,
			GeoJsonError::MissingField {
				field: "geometry",
				..
			}
		));
	}

	#[test]
	fn round_trip() {
		let collection: GeoCollection = vec![
			GeoFeature::new(Geometry::new_point([1.0, 2.0])),
			GeoFeature::new(Geometry::new_line_string(vec![[1.0, 2.0], [3.0, 4.0]])),
		]
		.into_iter()
		.collect();
		assert_eq!(GeoCollection::from_json(&collection.to_json()).unwrap(), collection);
	}
}
