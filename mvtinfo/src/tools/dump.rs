use anyhow::Result;
use clap::Args;
use mvtinfo::{TileInput, report::write_dump};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// vector tile file: uncompressed, zlib or gzip compressed protobuf
	#[arg(required = true)]
	filename: PathBuf,

	/// only dump the layer with this name
	#[arg(long, value_name = "NAME")]
	layer: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let input = TileInput::load(&arguments.filename)?;
	let layers = input.select_layers(arguments.layer.as_deref())?;
	write_dump(&mut std::io::stdout().lock(), input.compression, &layers)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::parse_command;

	#[test]
	fn verbose_alias() {
		let debug = parse_command(vec!["mvtinfo", "verbose", "tile.mvt"]).unwrap();
		assert!(debug.contains("Dump("));
	}
}
