use anyhow::Result;
use clap::Args;
use mvtinfo::{TileInput, report::write_summary};
use mvtinfo_geometry::ErrorPolicy;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// vector tile file: uncompressed, zlib or gzip compressed protobuf
	#[arg(required = true)]
	filename: PathBuf,

	/// leave features that fail to decode out of the counts instead of aborting
	#[arg(long)]
	skip_invalid: bool,

	/// only report the layer with this name
	#[arg(long, value_name = "NAME")]
	layer: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let input = TileInput::load(&arguments.filename)?;
	let layers = input.select_layers(arguments.layer.as_deref())?;
	let policy = if arguments.skip_invalid {
		ErrorPolicy::Skip
	} else {
		ErrorPolicy::Abort
	};

	write_summary(&mut std::io::stdout().lock(), input.compression, &layers, policy)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn missing_file() {
		let error = run_command(vec!["mvtinfo", "summary", "-q", "does/not/exist.mvt"]).unwrap_err();
		assert!(error.to_string().starts_with("could not open: "));
	}

	#[test]
	fn parses_flags() {
		let debug = crate::tests::parse_command(vec![
			"mvtinfo",
			"summary",
			"--skip-invalid",
			"--layer",
			"water",
			"tile.mvt",
		])
		.unwrap();
		assert!(debug.contains("skip_invalid: true"));
		assert!(debug.contains("layer: Some(\"water\")"));
	}
}
