mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use test_utilities::*;

#[test]
fn command() {
	geoconv_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("format", "[OPTIONS] <INPUT_FILE> [OUTPUT_FILE]")]
#[case("probe", "[OPTIONS] <INPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geoconv_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[rstest]
#[case("point.geojson")]
#[case("multi-polygon.geojson")]
#[case("geometry-collection.geojson")]
#[case("feature.geojson")]
fn format_to_stdout(#[case] filename: &str) {
	let expected = fs::read_to_string(get_testdata(filename)).unwrap();
	geoconv_cmd()
		.args(["format", &get_testdata(filename)])
		.assert()
		.success()
		.stdout(expected)
		.stderr(str::is_empty());
}

#[test]
fn format_pretty_to_file() {
	let (_dir, output) = get_temp_output("out.geojson");
	geoconv_cmd()
		.args([
			"format",
			"--pretty",
			&get_testdata("feature-null-properties.geojson"),
			output.to_str().unwrap(),
		])
		.assert()
		.success()
		.stdout(str::is_empty());

	let text = fs::read_to_string(&output).unwrap();
	assert!(text.starts_with("{\n  \"type\": \"Feature\",\n"));
	assert!(text.ends_with("  \"properties\": {}\n}\n"));
}

#[test]
fn format_from_stdin() {
	geoconv_cmd()
		.args(["format", "-"])
		.write_stdin("{ \"type\": \"Point\", \"coordinates\": [1, 2] }")
		.assert()
		.success()
		.stdout("{\"type\":\"Point\",\"coordinates\":[1.0,2.0]}\n");
}

#[test]
fn format_null_document() {
	geoconv_cmd()
		.args(["format", &get_testdata("null.geojson")])
		.assert()
		.success()
		.stdout("null\n");
}

#[test]
fn strict_config_rejects_missing_properties() {
	let input = get_testdata("feature-missing-properties.geojson");
	geoconv_cmd().args(["format", &input]).assert().success();

	geoconv_cmd()
		.args(["format", "--config", &get_testdata("config-strict.yaml"), &input])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("Feature must have a 'properties' property"));
}

#[test]
fn max_depth_flag() {
	geoconv_cmd()
		.args(["format", "--max-depth", "2", &get_testdata("geometry-collection.geojson")])
		.assert()
		.failure()
		.stderr(str::contains("nesting depth exceeds the limit of 2"));
}

#[test]
fn unsupported_type() {
	geoconv_cmd()
		.args(["probe", &get_testdata("circle.geojson")])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("unsupported GeoJSON type 'Circle'"));
}

#[test]
fn probe_feature_collection() {
	let output = geoconv_cmd()
		.args(["probe", &get_testdata("feature-collection.geojson")])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	assert_eq!(
		String::from_utf8(output).unwrap(),
		"type: FeatureCollection\nfeatures: 3\ngeometries:\n  LineString: 1\n  Point: 1\n  Polygon: 1\n"
	);
}
