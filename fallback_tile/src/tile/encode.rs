use super::{TILE_EXTENT, TILE_VERSION, definition::LayerDefinition};
use anyhow::{Context, Result};
use fallback_tile_core::Blob;
use fallback_tile_geometry::vector_tile::VectorTile;
use log::debug;

/// Encodes all layers into one vector tile.
///
/// Layers and features keep their order, so the same input always produces the same bytes.
pub fn encode_layers(layers: &[LayerDefinition]) -> Result<Blob> {
	let layers = layers
		.iter()
		.map(|layer| {
			debug!("encoding layer \"{}\" with {} features", layer.name, layer.features.len());
			layer
				.to_layer(TILE_EXTENT, TILE_VERSION)
				.with_context(|| format!("Failed to encode layer \"{}\"", layer.name))
		})
		.collect::<Result<Vec<_>>>()?;

	let blob = VectorTile::new(layers).to_blob()?;
	debug!("encoded tile has {} bytes", blob.len());
	Ok(blob)
}
