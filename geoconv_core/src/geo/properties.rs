use super::{GeoObject, GeoValue, read_json_object};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::{Map, Value as JsonValue};
use std::{collections::btree_map, fmt::Debug};

/// The `properties` mapping of a feature.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: GeoObject,
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: GeoObject::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.to_string(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.properties.remove(key)
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Reads the members of a JSON object, converting each value with [`GeoValue::from_json`].
	pub(crate) fn read_json(object: &Map<String, JsonValue>, depth: DepthGuard) -> Result<GeoProperties> {
		Ok(GeoProperties {
			properties: read_json_object(object, depth)?,
		})
	}

	/// Writes the properties as a JSON object. An empty mapping becomes `{}`.
	pub fn to_json(&self) -> JsonValue {
		JsonValue::Object(
			self
				.properties
				.iter()
				.map(|(key, value)| (key.clone(), value.to_json()))
				.collect(),
		)
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl From<GeoProperties> for GeoObject {
	fn from(value: GeoProperties) -> Self {
		value.properties
	}
}

impl From<GeoObject> for GeoProperties {
	fn from(properties: GeoObject) -> Self {
		GeoProperties { properties }
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: GeoObject::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
