use anyhow::{Context, Result};
use fallback_tile_core::Blob;
use fallback_tile_geometry::vector_tile::{VectorTile, VectorTileLayer};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub struct LayerSummary {
	pub name: String,
	pub feature_count: usize,
	pub extent: u32,
	pub version: u32,
}

/// Per-layer overview of a decoded tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSummary {
	pub layers: Vec<LayerSummary>,
}

impl TileSummary {
	#[must_use]
	pub fn from_tile(tile: &VectorTile) -> Self {
		Self {
			layers: tile.layers.iter().map(LayerSummary::from).collect(),
		}
	}

	pub fn from_blob(blob: &Blob) -> Result<Self> {
		let tile = VectorTile::from_blob(blob).context("Failed to decode vector tile")?;
		Ok(Self::from_tile(&tile))
	}
}

impl From<&VectorTileLayer> for LayerSummary {
	fn from(layer: &VectorTileLayer) -> Self {
		Self {
			name: layer.name.clone(),
			feature_count: layer.features.len(),
			extent: layer.extent,
			version: layer.version,
		}
	}
}

impl Display for TileSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for layer in &self.layers {
			writeln!(
				f,
				"layer \"{}\": {} features, extent {}, version {}",
				layer.name, layer.feature_count, layer.extent, layer.version
			)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tile::{TileVariant, encode_layers};
	use pretty_assertions::assert_eq;

	#[test]
	fn sample_summary() -> Result<()> {
		let blob = encode_layers(&TileVariant::Sample.layers()?)?;
		let summary = TileSummary::from_blob(&blob)?;
		assert_eq!(
			summary.to_string(),
			"layer \"lines\": 3 features, extent 4096, version 2\nlayer \"points\": 3 features, extent 4096, version 2\n"
		);
		Ok(())
	}

	#[test]
	fn empty_tile() -> Result<()> {
		let summary = TileSummary::from_blob(&Blob::new_empty())?;
		assert_eq!(summary, TileSummary::default());
		assert_eq!(summary.to_string(), "");
		Ok(())
	}

	#[test]
	fn garbage_is_rejected() {
		let error = TileSummary::from_blob(&Blob::from("not a tile")).unwrap_err();
		assert_eq!(error.to_string(), "Failed to decode vector tile");
	}
}
