// This module defines the geometric types of the model: `PointGeometry`, `LineStringGeometry`,
// `RingGeometry`, `PolygonGeometry` and their multi-geometry counterparts. Each type reads itself
// from and writes itself to the `coordinates` member of a GeoJSON geometry via `GeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
