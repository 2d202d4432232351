//! Mapbox Vector Tile (MVT 2.1) encoding and decoding.
//!
//! - [`tile`]: the top-level container holding layers.
//! - [`layer`]: a named layer with its key/value tables, extent and version.
//! - [`feature`]: per-feature geometry commands and tag ids.
//! - [`geometry_type`]: the wire-level geometry type.
//! - [`property_manager`]: the key/value tables and tag id encoding.
//! - [`value`]: typed property values on the wire.
//!
//! Building a tile from parsed features:
//!
//! ```
//! use fallback_tile_geometry::{GeoFeature, parse_wkt, vector_tile::{VectorTile, VectorTileLayer}};
//!
//! let square = GeoFeature::new(parse_wkt("POLYGON((0 0, 4096 0, 4096 4096, 0 4096, 0 0))").unwrap());
//! let layer = VectorTileLayer::from_features("square".to_string(), vec![square], 4096, 2).unwrap();
//! let blob = VectorTile::new(vec![layer]).to_blob().unwrap();
//!
//! let tile = VectorTile::from_blob(&blob).unwrap();
//! assert_eq!(tile.layers[0].name, "square");
//! ```

mod feature;
mod geometry_type;
mod layer;
mod property_manager;
mod tile;
mod value;

pub use feature::VectorTileFeature;
pub use geometry_type::GeomType;
pub use layer::VectorTileLayer;
pub use property_manager::{PropertyManager, VTLPMap};
pub use tile::VectorTile;
