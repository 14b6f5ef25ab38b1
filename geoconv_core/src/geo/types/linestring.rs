use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, read_coord_sequence};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically used for polylines or paths in 2D space.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Reads the positions of the line. The number of positions is not checked.
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self> {
		read_coord_sequence(json, depth, "LineString", |c, _| Coordinates::from_json(c)).map(Self)
	}

	/// Converts the line's coordinates into a JSON representation.
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(Coordinates::to_json).collect())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns a reference to the internal vector of coordinates representing the points of the line.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of coordinates representing the points of the line.
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}

	/// Consumes the `LineStringGeometry` and returns the internal vector of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	/// Prints the list of coordinates in a developer-friendly format.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_items!(LineStringGeometry => Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoJsonError;
	use serde_json::json;

	#[test]
	fn read_and_write() {
		let json = json!([[100.0, 0.0], [101.0, 1.0]]);
		let line = LineStringGeometry::from_coord_json(&json).unwrap();
		assert_eq!(line, LineStringGeometry::from(&[[100.0, 0.0], [101.0, 1.0]]));
		assert_eq!(line.to_coord_json(), json);
	}

	#[test]
	fn single_position_is_not_validated() {
		let line = LineStringGeometry::from_coord_json(&json!([[1, 2]])).unwrap();
		assert_eq!(line.len(), 1);
	}

	#[test]
	fn flat_array_is_malformed() {
		let err = LineStringGeometry::from_coord_json(&json!([1, 2])).unwrap_err();
		assert!(matches!(err, GeoJsonError::MalformedGeometry(_)));
	}
}
