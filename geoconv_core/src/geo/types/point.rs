use super::{Coordinates, GeometryTrait};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// Represents a single geographic or geometric point defined by x and y coordinates.
///
/// This is the simplest geometric type and is often used as a building block for more complex geometries.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Reads a position `[x, y, ...]`; a point has no nested arrays to descend into.
	fn read_coord_json(json: &JsonValue, _depth: DepthGuard) -> Result<Self> {
		Coordinates::from_json(json).map(Self)
	}

	/// Returns the point as a JSON array `[x, y]`.
	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn eq_and_ne() {
		assert_eq!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[1, 2]));
		assert_ne!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[3, 4]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn from_coord_json() {
		let point = PointGeometry::from_coord_json(&json!([30.5, 50.5])).unwrap();
		assert_eq!(point, PointGeometry::from([30.5, 50.5]));
	}

	#[test]
	fn from_coord_json_too_short() {
		assert!(PointGeometry::from_coord_json(&json!([30.5])).is_err());
	}

	#[test]
	fn to_coord_json() {
		assert_eq!(PointGeometry::from([1.5, 2.5]).to_coord_json(), json!([1.5, 2.5]));
	}
}
