use super::{CompositeGeometryTrait, GeometryTrait, RingGeometry, read_coord_sequence};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

/// A polygon as a list of rings. The first ring is the outer boundary, the others are holes;
/// neither role is enforced.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self> {
		read_coord_sequence(json, depth, "Polygon", RingGeometry::read_coord_json).map(Self)
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(RingGeometry::to_coord_json).collect())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_items!(PolygonGeometry => RingGeometry);
