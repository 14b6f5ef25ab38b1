use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, read_coord_sequence};
use crate::Result;
use crate::geojson::DepthGuard;
use serde_json::Value as JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn read_coord_json(json: &JsonValue, depth: DepthGuard) -> Result<Self> {
		read_coord_sequence(json, depth, "MultiLineString", LineStringGeometry::read_coord_json).map(Self)
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(LineStringGeometry::to_coord_json).collect())
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_items!(MultiLineStringGeometry => LineStringGeometry);
