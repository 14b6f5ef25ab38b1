use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, read_coord_sequence};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self> {
		read_coord_sequence(json, depth, "MultiPolygon", PolygonGeometry::read_coord_json).map(Self)
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(PolygonGeometry::to_coord_json).collect())
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_items!(MultiPolygonGeometry => PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoJsonError;
	use serde_json::json;

	#[test]
	fn read_and_write() {
		let json = json!([[[[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]]]);
		let multi = MultiPolygonGeometry::from_coord_json(&json).unwrap();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first().map(|p| p.len()), Some(1));
		assert_eq!(multi.to_coord_json(), json);
	}

	#[test]
	fn depth_limit() {
		let json = json!([[[[0, 0], [1, 1]]]]);
		let err = MultiPolygonGeometry::read_coord_json(&json, DepthGuard::new(2)).unwrap_err();
		assert!(matches!(err, GeoJsonError::DepthLimitExceeded(2)));
		assert!(MultiPolygonGeometry::read_coord_json(&json, DepthGuard::new(3)).is_ok());
	}
}
