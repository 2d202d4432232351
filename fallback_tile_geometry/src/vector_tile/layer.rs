//! A single tile layer.
//!
//! Wire layout:
//!  * field 1: `name` (string)
//!  * field 2: repeated `feature` (embedded message)
//!  * field 3: repeated `keys` (string)
//!  * field 4: repeated `values` (embedded message)
//!  * field 5: `extent` (varint, default 4096)
//!  * field 15: `version` (varint, default 1)

use super::{feature::VectorTileFeature, property_manager::PropertyManager, value::GeoValuePBF};
use crate::{GeoFeature, GeoProperties, GeoValue};
use anyhow::{Context, Result, anyhow, bail};
use byteorder::LE;
use fallback_tile_core::{
	Blob,
	io::{ValueReader, ValueWriter, ValueWriterBlob, WIRE_LEN, WIRE_VARINT},
};
use log::trace;

pub const DEFAULT_EXTENT: u32 = 4096;
pub const DEFAULT_VERSION: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileLayer {
	pub extent: u32,
	pub features: Vec<VectorTileFeature>,
	pub name: String,
	pub property_manager: PropertyManager,
	pub version: u32,
}

impl VectorTileLayer {
	#[must_use]
	pub fn new(name: String, extent: u32, version: u32) -> VectorTileLayer {
		VectorTileLayer {
			extent,
			features: vec![],
			name,
			property_manager: PropertyManager::default(),
			version,
		}
	}

	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileLayer> {
		let mut extent = DEFAULT_EXTENT;
		let mut features: Vec<VectorTileFeature> = Vec::new();
		let mut name = None;
		let mut property_manager = PropertyManager::new();
		let mut version = DEFAULT_VERSION;

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, WIRE_LEN) => name = Some(reader.read_pbf_string().context("Failed to read layer name")?),
				(2, WIRE_LEN) => features.push(
					VectorTileFeature::read(
						reader
							.get_pbf_sub_reader()
							.context("Failed to get PBF sub-reader for feature")?
							.as_mut(),
					)
					.context("Failed to read VectorTileFeature")?,
				),
				(3, WIRE_LEN) => {
					property_manager.add_key(reader.read_pbf_string().context("Failed to read property key")?);
				}
				(4, WIRE_LEN) => {
					property_manager.add_val(
						GeoValue::read(
							reader
								.get_pbf_sub_reader()
								.context("Failed to get PBF sub-reader for property value")?
								.as_mut(),
						)
						.context("Failed to read GeoValue")?,
					);
				}
				(5, WIRE_VARINT) => extent = u32::try_from(reader.read_varint().context("Failed to read extent")?)?,
				(15, WIRE_VARINT) => version = u32::try_from(reader.read_varint().context("Failed to read version")?)?,
				(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
			}
		}

		Ok(VectorTileLayer {
			extent,
			features,
			name: name
				.ok_or(anyhow!("Layer name is required"))
				.context("Failed to get layer name")?,
			property_manager,
			version,
		})
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		writer.write_pbf_key(1, WIRE_LEN)?;
		writer.write_pbf_string(&self.name).context("Failed to write layer name")?;

		for feature in &self.features {
			writer.write_pbf_key(2, WIRE_LEN)?;
			writer
				.write_pbf_blob(&feature.to_blob().context("Failed to convert feature to blob")?)
				.context("Failed to write feature blob")?;
		}

		for key in self.property_manager.iter_key() {
			writer.write_pbf_key(3, WIRE_LEN)?;
			writer.write_pbf_string(key).context("Failed to write property key")?;
		}

		for value in self.property_manager.iter_val() {
			writer.write_pbf_key(4, WIRE_LEN)?;
			writer
				.write_pbf_blob(&value.to_blob().context("Failed to convert property value to blob")?)
				.context("Failed to write property value blob")?;
		}

		if self.extent != DEFAULT_EXTENT {
			writer.write_pbf_key(5, WIRE_VARINT)?;
			writer
				.write_varint(u64::from(self.extent))
				.context("Failed to write extent")?;
		}

		if self.version != DEFAULT_VERSION {
			writer.write_pbf_key(15, WIRE_VARINT)?;
			writer
				.write_varint(u64::from(self.version))
				.context("Failed to write version")?;
		}

		Ok(writer.into_blob())
	}

	/// Builds a layer from features, in order.
	///
	/// Every geometry must lie within `0..=extent`. Property keys and values enter the layer
	/// tables in first-seen order.
	pub fn from_features(name: String, features: Vec<GeoFeature>, extent: u32, version: u32) -> Result<VectorTileLayer> {
		let mut layer = VectorTileLayer::new(name, extent, version);
		for (index, feature) in features.into_iter().enumerate() {
			layer
				.add_feature(feature)
				.with_context(|| format!("Failed to add feature #{index} to layer \"{}\"", layer.name))?;
		}
		trace!(
			"layer \"{}\": {} features, {} keys, {} values",
			layer.name,
			layer.features.len(),
			layer.property_manager.key.len(),
			layer.property_manager.val.len()
		);
		Ok(layer)
	}

	pub fn add_feature(&mut self, feature: GeoFeature) -> Result<()> {
		feature.geometry.check_extent(self.extent)?;
		let tag_ids = self.encode_tag_ids(feature.properties);
		self
			.features
			.push(VectorTileFeature::from_geometry(feature.id, tag_ids, feature.geometry)?);
		Ok(())
	}

	pub fn to_features(&self) -> Result<Vec<GeoFeature>> {
		self
			.features
			.iter()
			.map(|feature| feature.to_feature(self).context("Failed to convert VectorTileFeature to GeoFeature"))
			.collect()
	}

	pub fn encode_tag_ids(&mut self, properties: GeoProperties) -> Vec<u32> {
		self.property_manager.encode_tag_ids(properties)
	}

	pub fn decode_tag_ids(&self, tag_ids: &[u32]) -> Result<GeoProperties> {
		self.property_manager.decode_tag_ids(tag_ids)
	}
}
