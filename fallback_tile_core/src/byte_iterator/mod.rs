//! Byte-level iteration for small text formats such as WKT.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
