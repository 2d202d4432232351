//! Tile layouts, encoding and output.

mod definition;
mod encode;
mod output;
mod stripes;
mod summary;
mod tables;
mod variant;

pub use definition::{FeatureDefinition, LayerDefinition, PropertyValue, StaticFeature, StaticLayer};
pub use encode::encode_layers;
pub use output::{DEFAULT_OUTPUT_PATH, OutputFormat, write_tile};
pub use stripes::{Stripe, boundary_lines, stripe_layer, stripes};
pub use summary::{LayerSummary, TileSummary};
pub use variant::{STRIPE_DIVISOR, TileVariant};

/// Side length of the tile coordinate space.
pub const TILE_EXTENT: u32 = 4096;

/// Vector tile format version written into every layer.
pub const TILE_VERSION: u32 = 2;
