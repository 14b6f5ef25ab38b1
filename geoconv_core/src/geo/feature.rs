use super::*;
use crate::geojson::{DepthGuard, ToGeoJson, json_kind, type_member};
use crate::{GeoJsonError, PropertiesMode, ReadOptions, Result};
use serde_json::{Map, Value as JsonValue};
use std::fmt::Debug;

/// A geometry together with its properties and an optional identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoIdentifier>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoIdentifier: From<T>,
	{
		self.id = Some(GeoIdentifier::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// Reads a GeoJSON feature object using the default [`ReadOptions`].
	pub fn from_json(json: &JsonValue) -> Result<GeoFeature> {
		let options = ReadOptions::default();
		GeoFeature::read_json(json, &options, DepthGuard::new(options.max_depth))
	}

	pub(crate) fn read_json(json: &JsonValue, options: &ReadOptions, depth: DepthGuard) -> Result<GeoFeature> {
		let object = expect_json_object(json, "Feature")?;
		let depth = depth.descend()?;

		match type_member(object) {
			Ok(Some("Feature")) => {}
			Ok(Some(other)) => return Err(GeoJsonError::InvalidFeatureType(other.to_string())),
			Ok(None) => {
				return Err(GeoJsonError::MissingField {
					object: "Feature",
					field: "type",
				});
			}
			Err(kind) => return Err(GeoJsonError::InvalidFeatureType(format!("<{kind}>"))),
		}

		let geometry = match object.get("geometry") {
			None => {
				return Err(GeoJsonError::MissingField {
					object: "Feature",
					field: "geometry",
				});
			}
			Some(JsonValue::Object(geometry)) => Geometry::read_json_object(geometry, depth)?,
			Some(other) => {
				return Err(GeoJsonError::MalformedGeometry(format!(
					"a feature geometry must be an object, found {}",
					json_kind(other)
				)));
			}
		};

		let id = object.get("id").map(GeoIdentifier::from_json).transpose()?;
		let properties = read_properties(object, options, depth)?;

		Ok(GeoFeature {
			id,
			geometry,
			properties,
		})
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoIdentifier::from(13u64)),
			geometry: Geometry::new_example(),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348_085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

fn read_properties(object: &Map<String, JsonValue>, options: &ReadOptions, depth: DepthGuard) -> Result<GeoProperties> {
	match object.get("properties") {
		None => match options.properties {
			PropertiesMode::Lenient => Ok(GeoProperties::new()),
			PropertiesMode::Strict => Err(GeoJsonError::MissingField {
				object: "Feature",
				field: "properties",
			}),
		},
		Some(JsonValue::Null) => Ok(GeoProperties::new()),
		Some(JsonValue::Object(properties)) => GeoProperties::read_json(properties, depth),
		Some(other) => Err(GeoJsonError::type_mismatch(
			"Feature 'properties'",
			"an object or null",
			json_kind(other),
		)),
	}
}

impl ToGeoJson for GeoFeature {
	/// Writes `type`, `id` (only if present), `geometry` and `properties` (always, `{}` if empty).
	fn to_json(&self) -> JsonValue {
		let mut object = Map::with_capacity(4);
		object.insert("type".to_string(), JsonValue::from("Feature"));
		if let Some(id) = &self.id {
			object.insert("id".to_string(), id.to_json());
		}
		object.insert("geometry".to_string(), self.geometry.to_json());
		object.insert("properties".to_string(), self.properties.to_json());
		JsonValue::Object(object)
	}
}
