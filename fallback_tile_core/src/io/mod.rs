//! Value writers and readers for the protobuf wire format.
//!
//! [`ValueWriter`] and [`ValueReader`] are generic over the byte order of fixed-width values
//! (`f32`, `f64`). Vector tiles use little-endian throughout, hence the `new_le` constructors.
//!
//! ```rust
//! use fallback_tile_core::io::*;
//!
//! let mut writer = ValueWriterBlob::new_le();
//! writer.write_pbf_key(1, 2).unwrap();
//! writer.write_pbf_string("water").unwrap();
//! let blob = writer.into_blob();
//!
//! let mut reader = ValueReaderSlice::new_le(blob.as_slice());
//! assert_eq!(reader.read_pbf_key().unwrap(), (1, 2));
//! assert_eq!(reader.read_pbf_string().unwrap(), "water");
//! ```

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
