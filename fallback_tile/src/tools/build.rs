use anyhow::{Context, Result};
use fallback_tile::{
	config::LayerTable,
	tile::{DEFAULT_OUTPUT_PATH, LayerDefinition, OutputFormat, TileVariant, encode_layers, write_tile},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// built-in layout to encode
	#[arg(long, short = 't', value_enum, default_value_t = TileVariant::Stripes)]
	variant: TileVariant,

	/// YAML layer table replacing the built-in layout
	#[arg(long, short, value_name = "YAML_FILE", conflicts_with = "variant")]
	layers: Option<PathBuf>,

	/// raw protobuf bytes, or the debug rendering of the byte buffer
	#[arg(long, short, value_enum, default_value_t = OutputFormat::Raw)]
	format: OutputFormat,

	/// file to write; its directory must already exist
	#[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
	output: PathBuf,
}

impl Default for Subcommand {
	fn default() -> Self {
		Self {
			variant: TileVariant::default(),
			layers: None,
			format: OutputFormat::default(),
			output: PathBuf::from(DEFAULT_OUTPUT_PATH),
		}
	}
}

impl Subcommand {
	fn load_layers(&self) -> Result<Vec<LayerDefinition>> {
		if let Some(path) = &self.layers {
			log::debug!("loading layer table {path:?}");
			Ok(LayerTable::from_path(path)?.into_layers())
		} else {
			log::debug!("using built-in variant {}", self.variant);
			self.variant.layers()
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let layers = arguments.load_layers()?;
	let blob = encode_layers(&layers).context("Failed to build fallback tile")?;
	write_tile(&blob, &arguments.output, arguments.format)?;

	eprintln!(
		"wrote {} tile with {} layers ({} bytes) to {:?}",
		arguments.format,
		layers.len(),
		blob.len(),
		arguments.output
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::TempDir;
	use fallback_tile::tile::TileSummary;
	use fallback_tile_core::Blob;
	use rstest::rstest;

	#[rstest]
	#[case("stripes", &["square", "stripes"])]
	#[case("square", &["square"])]
	#[case("sample", &["lines", "points"])]
	fn build_variant(#[case] variant: &str, #[case] layers: &[&str]) {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("tile.mvt");
		run_command(vec![
			"fallback_tile",
			"build",
			"--variant",
			variant,
			"--output",
			path.to_str().unwrap(),
		])
		.unwrap();

		let summary = TileSummary::from_blob(&Blob::load_from_file(&path).unwrap()).unwrap();
		let names: Vec<&str> = summary.layers.iter().map(|l| l.name.as_str()).collect();
		assert_eq!(names, layers);
	}

	#[test]
	fn build_debug_format() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("tile.txt");
		run_command(vec![
			"fallback_tile",
			"build",
			"-t",
			"square",
			"-f",
			"debug",
			"-o",
			path.to_str().unwrap(),
		])
		.unwrap();

		let text = std::fs::read_to_string(&path).unwrap();
		assert!(text.starts_with("Blob("), "{text}");
	}

	#[test]
	fn build_from_layer_table() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("tile.mvt");
		run_command(vec![
			"fallback_tile",
			"build",
			"--layers",
			"testdata/layers.yml",
			"--output",
			path.to_str().unwrap(),
		])
		.unwrap();

		let summary = TileSummary::from_blob(&Blob::load_from_file(&path).unwrap()).unwrap();
		assert_eq!(summary.layers[1].name, "labels");
		assert_eq!(summary.layers[1].feature_count, 2);
	}

	#[test]
	fn layers_and_variant_conflict() {
		let error = run_command(vec![
			"fallback_tile",
			"build",
			"--variant",
			"square",
			"--layers",
			"testdata/layers.yml",
		])
		.unwrap_err();
		assert!(error.to_string().contains("cannot be used with"), "{error}");
	}

	#[test]
	fn missing_directory_fails() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("missing").join("tile.mvt");
		let error = run_command(vec!["fallback_tile", "build", "-o", path.to_str().unwrap()]).unwrap_err();
		assert_eq!(error.to_string(), "Failed to write raw tile");
		assert!(!path.exists());
	}
}
