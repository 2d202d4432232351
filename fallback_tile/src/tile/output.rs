use anyhow::{Context, Result};
use fallback_tile_core::Blob;
use log::info;
use std::{fmt::Display, path::Path};

/// Where the tile is written unless another path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/render-timeout-fallback.mvt";

/// How the encoded tile is stored.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
	/// the encoded bytes as they are
	#[default]
	Raw,
	/// a textual dump: `Blob(<length>): <hex bytes>`
	Debug,
}

impl OutputFormat {
	#[must_use]
	pub fn render(&self, blob: &Blob) -> Blob {
		match self {
			OutputFormat::Raw => blob.clone(),
			OutputFormat::Debug => Blob::from(format!("{blob:?}")),
		}
	}
}

impl Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			OutputFormat::Raw => "raw",
			OutputFormat::Debug => "debug",
		})
	}
}

/// Writes the tile to `path`, replacing any existing file. Missing parent directories are an error.
pub fn write_tile(blob: &Blob, path: &Path, format: OutputFormat) -> Result<()> {
	let payload = format.render(blob);
	payload
		.save_to_file(path)
		.with_context(|| format!("Failed to write {format} tile"))?;
	info!("wrote {} bytes ({format}) to {path:?}", payload.len());
	Ok(())
}
