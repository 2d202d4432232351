//! Well-Known Text input.
//!
//! Only the two-dimensional geometry types a vector tile can hold are accepted: `POINT`,
//! `LINESTRING`, `POLYGON` and their `MULTI*` forms.

mod parse;

pub use parse::parse_wkt;
