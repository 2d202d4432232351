//! Builds the static vector tile served when tile rendering times out.
//!
//! A tile is described as a list of [`tile::LayerDefinition`]s: named layers holding WKT geometries
//! and scalar properties. The built-in [`tile::TileVariant`]s provide the fixed layouts, a YAML
//! [`config::LayerTable`] can replace them. [`tile::encode_layers`] turns the layers into an
//! encoded Mapbox Vector Tile and [`tile::write_tile`] stores it.
//!
//! ```no_run
//! use fallback_tile::tile::{OutputFormat, TileVariant, encode_layers, write_tile, DEFAULT_OUTPUT_PATH};
//! use std::path::Path;
//!
//! let layers = TileVariant::Stripes.layers().unwrap();
//! let blob = encode_layers(&layers).unwrap();
//! write_tile(&blob, Path::new(DEFAULT_OUTPUT_PATH), OutputFormat::Raw).unwrap();
//! ```

pub mod config;
pub mod tile;
