use anyhow::Result;
use fallback_tile::tile::TileSummary;
use fallback_tile_core::Blob;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// raw vector tile to decode
	#[arg(required = true)]
	filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("inspect {:?}", arguments.filename);

	let blob = Blob::load_from_file(&arguments.filename)?;
	let summary = TileSummary::from_blob(&blob)?;
	print!("{summary}");

	Ok(())
}
