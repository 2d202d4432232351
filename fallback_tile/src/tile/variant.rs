use super::{
	TILE_EXTENT,
	definition::LayerDefinition,
	stripes::stripe_layer,
	tables::{SAMPLE_LINES, SAMPLE_POINTS, SQUARE},
};
use anyhow::Result;
use std::fmt::Display;

/// Number of stripe steps across the tile.
pub const STRIPE_DIVISOR: u32 = 32;

/// The built-in tile layouts.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum TileVariant {
	/// bounding square plus diagonal stripes
	#[default]
	Stripes,
	/// bounding square only
	Square,
	/// a few lines and points with sample properties
	Sample,
}

impl TileVariant {
	/// Returns the layers of this variant, in encoding order.
	pub fn layers(&self) -> Result<Vec<LayerDefinition>> {
		Ok(match self {
			TileVariant::Stripes => vec![LayerDefinition::from(&SQUARE), stripe_layer(TILE_EXTENT, STRIPE_DIVISOR)?],
			TileVariant::Square => vec![LayerDefinition::from(&SQUARE)],
			TileVariant::Sample => vec![LayerDefinition::from(&SAMPLE_LINES), LayerDefinition::from(&SAMPLE_POINTS)],
		})
	}
}

impl Display for TileVariant {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			TileVariant::Stripes => "stripes",
			TileVariant::Square => "square",
			TileVariant::Sample => "sample",
		})
	}
}
