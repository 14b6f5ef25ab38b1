use crate::geojson::{DepthGuard, json_kind};
use crate::{GeoJsonError, Result};
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// Conversion between a geometry and the value of its GeoJSON `coordinates` member.
pub trait GeometryTrait: Debug + Clone + PartialEq {
	/// Reads the geometry from a `coordinates` value, descending at most as deep as `depth`
	/// allows.
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self>;

	/// Reads the geometry from a `coordinates` value using the default depth limit.
	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Self::read_coord_json(json, DepthGuard::default())
	}

	/// Converts the geometry into the JSON representation of its coordinates.
	fn to_coord_json(&self) -> JsonValue;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Reads a JSON array element by element, preserving order.
///
/// `name` describes the array in error messages. The destination is allocated once with the
/// length of the array.
pub fn read_coord_sequence<T>(
	json: &JsonValue,
	depth: DepthGuard,
	name: &str,
	read: impl Fn(&JsonValue, DepthGuard) -> Result<T>,
) -> Result<Vec<T>> {
	let array = json.as_array().ok_or_else(|| {
		GeoJsonError::MalformedGeometry(format!("{name} coordinates must be an array, found {}", json_kind(json)))
	})?;
	let depth = depth.descend()?;

	let mut items = Vec::with_capacity(array.len());
	for item in array {
		items.push(read(item, depth)?);
	}
	Ok(items)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Coordinates;
	use serde_json::json;

	#[test]
	fn sequence_preserves_order() {
		let items = read_coord_sequence(&json!([[1, 2], [3, 4], [5, 6]]), DepthGuard::default(), "test", |j, _| {
			Coordinates::from_json(j)
		})
		.unwrap();
		assert_eq!(
			items,
			vec![Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0), Coordinates::new(5.0, 6.0)]
		);
	}

	#[test]
	fn sequence_rejects_non_arrays() {
		let err = read_coord_sequence(&json!({"a": 1}), DepthGuard::default(), "LineString", |j, _| {
			Coordinates::from_json(j)
		})
		.unwrap_err();
		assert_eq!(
			err.to_string(),
			"malformed geometry: LineString coordinates must be an array, found object"
		);
	}

	#[test]
	fn sequence_stops_at_first_error() {
		let err = read_coord_sequence(&json!([[1, 2], [3], "x"]), DepthGuard::default(), "test", |j, _| {
			Coordinates::from_json(j)
		})
		.unwrap_err();
		assert!(err.to_string().contains("at least 2 numbers"));
	}

	#[test]
	fn sequence_counts_depth() {
		let err = read_coord_sequence(&json!([]), DepthGuard::new(0), "test", |j, _| Coordinates::from_json(j)).unwrap_err();
		assert!(matches!(err, GeoJsonError::DepthLimitExceeded(0)));
	}
}
