//! Reading and writing GeoJSON.
//!
//! Reading goes through [`GeoJsonReader`] (or the `parse_*` shortcuts that use the default
//! [`ReadOptions`](crate::ReadOptions)); writing goes through the [`ToGeoJson`] trait.

mod depth;
mod json;
mod parse;
mod read;
mod write;

pub use depth::DepthGuard;
pub(crate) use json::*;
pub use parse::*;
pub use read::*;
pub use write::*;
