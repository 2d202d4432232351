use super::layer::VectorTileLayer;
use anyhow::{Context, Result, bail};
use fallback_tile_core::{Blob, io::*};

/// A decoded vector tile: an ordered list of layers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	pub layers: Vec<VectorTileLayer>,
}

impl VectorTile {
	#[must_use]
	pub fn new(layers: Vec<VectorTileLayer>) -> VectorTile {
		VectorTile { layers }
	}

	pub fn from_blob(blob: &Blob) -> Result<VectorTile> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());

		let mut tile = VectorTile::default();
		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(3, WIRE_LEN) => {
					let layer = VectorTileLayer::read(
						reader
							.get_pbf_sub_reader()
							.context("Failed to get PBF sub-reader")?
							.as_mut(),
					)
					.with_context(|| format!("Failed to read layer #{}", tile.layers.len()))?;
					tile.layers.push(layer);
				}
				(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
			}
		}

		Ok(tile)
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		for layer in &self.layers {
			writer.write_pbf_key(3, WIRE_LEN)?;
			writer
				.write_pbf_blob(
					&layer
						.to_blob()
						.with_context(|| format!("Failed to encode layer \"{}\"", layer.name))?,
				)
				.context("Failed to write PBF blob")?;
		}

		Ok(writer.into_blob())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoFeature, Geometry};

	fn sample_tile() -> Result<VectorTile> {
		let line = GeoFeature::new(Geometry::new_line_string(&[[0, 0], [4096, 4096]]));
		let point = GeoFeature::new(Geometry::new_point([2048, 2048]));
		Ok(VectorTile::new(vec![
			VectorTileLayer::from_features("lines".to_string(), vec![line], 4096, 2)?,
			VectorTileLayer::from_features("points".to_string(), vec![point], 4096, 2)?,
		]))
	}

	#[test]
	fn from_to_blob() -> Result<()> {
		let tile1 = sample_tile()?;
		let blob = tile1.to_blob()?;
		let tile2 = VectorTile::from_blob(&blob)?;
		assert_eq!(tile1, tile2);
		assert_eq!(tile2.to_blob()?, blob);
		Ok(())
	}

	#[test]
	fn empty_tile() -> Result<()> {
		assert!(VectorTile::default().to_blob()?.is_empty());
		assert_eq!(VectorTile::from_blob(&Blob::new_empty())?, VectorTile::default());
		Ok(())
	}

	#[test]
	fn rejects_unknown_field() {
		let error = VectorTile::from_blob(&Blob::from(vec![0x08, 0x01])).unwrap_err();
		assert_eq!(
			error.to_string(),
			"Unexpected combination of field number (1) and wire type (0)"
		);
	}

	#[test]
	fn rejects_truncated_layer() {
		assert!(VectorTile::from_blob(&Blob::from(vec![0x1A, 0x05, 0x0A])).is_err());
	}
}
