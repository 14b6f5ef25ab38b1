//! Lossless conversion between GeoJSON documents and a typed geometry and feature model.
//!
//! The model consists of [`Geometry`], [`GeoFeature`], [`GeoCollection`] and the
//! top-level [`GeoJson`] union, together with the dynamically typed [`GeoValue`] used for
//! feature properties. The [`geojson`] module reads that model from JSON text, a
//! [`serde_json::Value`] tree or a [`GeoValue`], and writes it back.
//!
//! ```
//! use geoconv_core::{GeoJson, ToGeoJson, parse_geojson};
//!
//! let geojson = parse_geojson(r#"{"type":"Point","coordinates":[30.5,50.5]}"#).unwrap();
//! assert!(matches!(geojson, GeoJson::Geometry(_)));
//! assert_eq!(geojson.to_json_string(), r#"{"type":"Point","coordinates":[30.5,50.5]}"#);
//! ```

mod error;
mod geo;
pub mod geojson;
mod options;

pub use error::*;
pub use geo::*;
pub use geojson::*;
pub use options::*;
