use super::*;
use crate::geojson::{DepthGuard, ToGeoJson, json_kind, type_member};
use crate::{GeoJsonError, Result};
use serde_json::{Map, Value as JsonValue};
use std::fmt::Debug;

/// Names of the geometry kinds, as used by the GeoJSON `type` member.
pub const GEOMETRY_TYPE_NAMES: [&str; 7] = [
	"Point",
	"MultiPoint",
	"LineString",
	"MultiLineString",
	"Polygon",
	"MultiPolygon",
	"GeometryCollection",
];

/// One of the seven GeoJSON geometry kinds.
///
/// `GeometryCollection` holds further geometries and is the only recursive variant.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(geometries)
	}

	/// Returns the GeoJSON `type` name of the geometry.
	pub fn get_type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Returns `true` if `name` is the `type` of one of the geometry kinds.
	pub fn is_type_name(name: &str) -> bool {
		GEOMETRY_TYPE_NAMES.contains(&name)
	}

	/// Reads a GeoJSON geometry object.
	pub fn from_json(json: &JsonValue) -> Result<Geometry> {
		Geometry::read_json(json, DepthGuard::default())
	}

	pub(crate) fn read_json(json: &JsonValue, depth: DepthGuard) -> Result<Geometry> {
		let object = json.as_object().ok_or_else(|| {
			GeoJsonError::MalformedGeometry(format!("a geometry must be an object, found {}", json_kind(json)))
		})?;
		Geometry::read_json_object(object, depth)
	}

	pub(crate) fn read_json_object(object: &Map<String, JsonValue>, depth: DepthGuard) -> Result<Geometry> {
		let geometry_type = match type_member(object) {
			Ok(Some(name)) => name,
			Ok(None) => return Err(GeoJsonError::MalformedGeometry("a geometry must have a 'type' property".to_string())),
			Err(kind) => {
				return Err(GeoJsonError::MalformedGeometry(format!(
					"a geometry 'type' must be a string, found {kind}"
				)));
			}
		};

		if geometry_type == "GeometryCollection" {
			let geometries = crate::geojson::array_member(
				object,
				"GeometryCollection",
				"geometries",
				"GeometryCollection 'geometries'",
			)?;
			let depth = depth.descend()?;
			let mut list = Vec::with_capacity(geometries.len());
			for geometry in geometries {
				list.push(Geometry::read_json(geometry, depth.descend()?)?);
			}
			return Ok(Geometry::GeometryCollection(list));
		}

		if !Geometry::is_type_name(geometry_type) {
			return Err(GeoJsonError::UnsupportedGeometryType(geometry_type.to_string()));
		}

		let coordinates = object.get("coordinates").ok_or(GeoJsonError::MissingField {
			object: "Geometry",
			field: "coordinates",
		})?;

		Ok(match geometry_type {
			"Point" => Geometry::Point(PointGeometry::read_coord_json(coordinates, depth)?),
			"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry::read_coord_json(coordinates, depth)?),
			"LineString" => Geometry::LineString(LineStringGeometry::read_coord_json(coordinates, depth)?),
			"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry::read_coord_json(coordinates, depth)?),
			"Polygon" => Geometry::Polygon(PolygonGeometry::read_coord_json(coordinates, depth)?),
			"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry::read_coord_json(coordinates, depth)?),
			other => return Err(GeoJsonError::UnsupportedGeometryType(other.to_string())),
		})
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl ToGeoJson for Geometry {
	/// Writes `type` and either `coordinates` or, for a collection, `geometries`.
	fn to_json(&self) -> JsonValue {
		let mut object = Map::with_capacity(2);
		object.insert("type".to_string(), JsonValue::from(self.get_type_name()));
		let (key, payload) = match self {
			Geometry::Point(g) => ("coordinates", g.to_coord_json()),
			Geometry::MultiPoint(g) => ("coordinates", g.to_coord_json()),
			Geometry::LineString(g) => ("coordinates", g.to_coord_json()),
			Geometry::MultiLineString(g) => ("coordinates", g.to_coord_json()),
			Geometry::Polygon(g) => ("coordinates", g.to_coord_json()),
			Geometry::MultiPolygon(g) => ("coordinates", g.to_coord_json()),
			Geometry::GeometryCollection(list) => ("geometries", JsonValue::Array(list.iter().map(Geometry::to_json).collect())),
		};
		object.insert(key.to_string(), payload);
		JsonValue::Object(object)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::GeometryCollection(g) => ("GeometryCollection", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
