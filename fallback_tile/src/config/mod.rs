//! YAML layer tables that replace the built-in tile layouts.

mod layer_table;

pub use layer_table::LayerTable;
