//! Byte-level building blocks shared by the fallback tile crates.
//!
//! - [`Blob`]: an owned byte buffer, the unit every encoder returns.
//! - [`io`]: protobuf value writers and readers with configurable byte order.
//! - [`byte_iterator`]: a peekable byte scanner plus small text parsing helpers.

pub mod byte_iterator;
pub mod io;
pub mod types;

pub use types::*;
