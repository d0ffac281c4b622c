//! TIFF dimension lookup.
//!
//! # Key Concepts
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian,
//!   MM = big-endian) in the header. Every multi-byte field that follows is
//!   read in that order.
//!
//! - **IFD (Image File Directory)**: a table of 12-byte tagged entries. The
//!   first IFD describes the main image, including its ImageWidth (256) and
//!   ImageLength (257).
//!
//! Only classic TIFF is recognised; BigTIFF (version 43) fails detection.

mod parser;
mod tags;

pub use parser::{parse, IfdEntry, IFD_ENTRY_SIZE, TIFF_HEADER_SIZE};
pub use tags::{FieldType, TiffTag, VALUE_SLOT_SIZE};
