use super::ReadArgs;
use anyhow::Result;
use geoconv_core::{GeoJson, Geometry};
use std::{collections::BTreeMap, fmt::Write};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: ReadArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.input.config()?;
	let geojson = arguments.input.read(&config)?;
	print!("{}", summarize(&geojson));
	Ok(())
}

/// Describes a document: its kind, the number of features and the geometries by kind.
pub fn summarize(geojson: &GeoJson) -> String {
	let mut geometries = BTreeMap::new();
	let features = match geojson {
		GeoJson::Empty => None,
		GeoJson::Geometry(geometry) => {
			count_geometries(geometry, &mut geometries);
			None
		}
		GeoJson::Feature(feature) => {
			count_geometries(&feature.geometry, &mut geometries);
			Some(1)
		}
		GeoJson::FeatureCollection(collection) => {
			for feature in &collection.features {
				count_geometries(&feature.geometry, &mut geometries);
			}
			Some(collection.len())
		}
	};

	let mut text = format!("type: {}\n", geojson.type_name());
	if let Some(count) = features {
		let _ = writeln!(text, "features: {count}");
	}
	if !geometries.is_empty() {
		text.push_str("geometries:\n");
		for (name, count) in geometries {
			let _ = writeln!(text, "  {name}: {count}");
		}
	}
	text
}

fn count_geometries(geometry: &Geometry, counts: &mut BTreeMap<&'static str, usize>) {
	*counts.entry(geometry.get_type_name()).or_default() += 1;
	if let Geometry::GeometryCollection(list) = geometry {
		for child in list {
			count_geometries(child, counts);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use geoconv_core::parse_geojson;
	use pretty_assertions::assert_eq;

	#[test]
	fn summarize_collection() {
		let geojson = parse_geojson(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}},
				{"type":"Feature","geometry":{"type":"GeometryCollection","geometries":[
					{"type":"Point","coordinates":[1,2]},
					{"type":"LineString","coordinates":[[1,2],[3,4]]}
				]}}
			]}"#,
		)
		.unwrap();
		assert_eq!(
			summarize(&geojson),
			"type: FeatureCollection\nfeatures: 2\ngeometries:\n  GeometryCollection: 1\n  LineString: 1\n  Point: 2\n"
		);
	}

	#[test]
	fn summarize_empty() {
		assert_eq!(summarize(&GeoJson::Empty), "type: null\n");
	}

	#[test]
	fn probe_file() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("input.geojson");
		std::fs::write(&input, "null").unwrap();
		run_command(vec!["geoconv", "probe", "-q", input.to_str().unwrap()]).unwrap();
	}
}
