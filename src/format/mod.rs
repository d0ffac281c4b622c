//! Header parsers for the supported image formats.
//!
//! Use [`detect::detect_signature`] to identify the format from the leading
//! bytes, then hand the same cursor to the matching parser. Each parser
//! expects the cursor to sit right after its format's signature.
//!
//! - **GIF**: fixed logical screen descriptor
//! - **JPEG**: marker segment scan up to the first SOF0/SOF1/SOF2
//! - **PNG**: IHDR chunk (low 16 bits of each dimension)
//! - **BMP**: info header (low 16 bits of each dimension)
//! - **TIFF**: first IFD walk for ImageWidth/ImageLength

pub mod bmp;
pub mod detect;
pub mod gif;
mod info;
pub mod jpeg;
pub mod png;
pub mod tiff;

pub use detect::{classify, detect_signature, sniff, Classification, Signature};
pub use info::{ImageFormat, ImageInfo};
