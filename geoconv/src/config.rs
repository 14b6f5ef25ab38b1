use anyhow::{Context, Result};
use geoconv_core::ReadOptions;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings loaded from a YAML file passed with `--config`.
///
/// ```yaml
/// read:
///   properties: strict
///   max_depth: 64
/// pretty: true
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// How GeoJSON is read
	#[serde(default)]
	pub read: ReadOptions,

	/// Write indented output
	#[serde(default)]
	pub pretty: bool,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	#[cfg(test)]
	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))
	}
}
