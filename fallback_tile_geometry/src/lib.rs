//! Geometry model, WKT parsing and Mapbox Vector Tile encoding.
//!
//! The usual path through this crate: parse WKT with [`parse_wkt`], wrap the result in a
//! [`GeoFeature`] together with its [`GeoProperties`], collect features into a
//! [`vector_tile::VectorTileLayer`] and serialize a [`vector_tile::VectorTile`] to a blob.

mod geo;
pub mod vector_tile;
mod wkt;

pub use geo::*;
pub use wkt::*;
