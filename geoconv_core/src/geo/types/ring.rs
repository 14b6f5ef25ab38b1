use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, read_coord_sequence};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// A linear ring: a series of coordinates forming a loop, used as the building block for
/// polygons.
///
/// Closure is not checked or added. A ring read from JSON keeps exactly the positions of the
/// input, including a closing position equal to the first one.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring has positions and the last one equals the first one.
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self> {
		read_coord_sequence(json, depth, "LinearRing", |c, _| Coordinates::from_json(c)).map(Self)
	}

	/// Returns the coordinates of the ring as a JSON array.
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(Coordinates::to_json).collect())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_items!(RingGeometry => Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn closed_ring_is_kept_verbatim() {
		let json = json!([[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]);
		let ring = RingGeometry::from_coord_json(&json).unwrap();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring.first(), ring.last());
		assert!(ring.is_closed());
		assert_eq!(ring.to_coord_json(), json);
	}

	#[test]
	fn open_ring_is_not_closed() {
		let ring = RingGeometry::from_coord_json(&json!([[0, 0], [1, 0], [1, 1]])).unwrap();
		assert_eq!(ring.len(), 3);
		assert!(!ring.is_closed());
		assert!(!RingGeometry::new().is_closed());
	}
}
