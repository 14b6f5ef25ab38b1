pub mod format;
pub mod probe;

use crate::config::Config;
use anyhow::{Context, Result};
use geoconv_core::{GeoJson, GeoJsonReader, PropertiesMode};
use std::{
	fs::File,
	io::{self, BufReader},
	path::PathBuf,
};

/// Arguments shared by all subcommands that read GeoJSON.
#[derive(clap::Args, Debug)]
pub struct ReadArgs {
	/// GeoJSON file to read, or "-" for stdin
	#[arg()]
	input_file: String,

	/// fail on features without a "properties" member
	#[arg(long, display_order = 1)]
	strict: bool,

	/// maximum nesting depth of the input
	#[arg(long, value_name = "int", display_order = 1)]
	max_depth: Option<usize>,

	/// YAML file with read and write settings
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	config: Option<PathBuf>,
}

impl ReadArgs {
	/// Loads the config file, if any, and applies the command line flags on top.
	pub fn config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		if self.strict {
			config.read.properties = PropertiesMode::Strict;
		}
		if let Some(max_depth) = self.max_depth {
			config.read.max_depth = max_depth;
		}
		Ok(config)
	}

	pub fn read(&self, config: &Config) -> Result<GeoJson> {
		let reader = GeoJsonReader::new(config.read.clone());
		log::info!("reading {:?}", self.input_file);
		if self.input_file == "-" {
			return reader.parse_reader(io::stdin().lock()).context("Failed to read GeoJSON from stdin");
		}
		let file = File::open(&self.input_file).with_context(|| format!("Failed to open {:?}", self.input_file))?;
		reader
			.parse_reader(BufReader::new(file))
			.with_context(|| format!("Failed to read GeoJSON from {:?}", self.input_file))
	}
}
