use super::ReadArgs;
use anyhow::{Context, Result};
use geoconv_core::ToGeoJson;
use std::io::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: ReadArgs,

	/// file to write, or "-" for stdout (default)
	#[arg()]
	output_file: Option<String>,

	/// write indented GeoJSON
	#[arg(long, short, display_order = 3)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.input.config()?;
	let geojson = arguments.input.read(&config)?;

	let mut text = if arguments.pretty || config.pretty {
		geojson.to_json_string_pretty()
	} else {
		geojson.to_json_string()
	};
	text.push('\n');

	match arguments.output_file.as_deref() {
		None | Some("-") => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(text.as_bytes())?;
			stdout.flush()?;
		}
		Some(path) => {
			std::fs::write(path, text).with_context(|| format!("Failed to write {path:?}"))?;
			log::info!("wrote {} {:?}", geojson.type_name(), path);
		}
	}

	Ok(())
}
