use crate::tile::LayerDefinition;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// A list of layers read from YAML.
///
/// ```yaml
/// - name: lines
///   features:
///     - geometry: LINESTRING(0 0, 4096 4096)
///       properties:
///         cat: road
///         uid: 1
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LayerTable {
	pub layers: Vec<LayerDefinition>,
}

impl LayerTable {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open layer table {path:?}"))?;
		let table = LayerTable::from_reader(BufReader::new(file))
			.with_context(|| format!("Failed to parse layer table {path:?}"))?;
		table.verify()?;
		Ok(table)
	}

	/// Rejects empty tables and duplicate layer names.
	pub fn verify(&self) -> Result<()> {
		ensure!(!self.layers.is_empty(), "layer table must contain at least one layer");
		for (index, layer) in self.layers.iter().enumerate() {
			ensure!(
				!self.layers[..index].iter().any(|other| other.name == layer.name),
				"duplicate layer name \"{}\"",
				layer.name
			);
		}
		Ok(())
	}

	#[must_use]
	pub fn into_layers(self) -> Vec<LayerDefinition> {
		self.layers
	}
}
