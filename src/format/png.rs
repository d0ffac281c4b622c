//! PNG IHDR dimensions.
//!
//! ```text
//! Bytes  0-7:  Signature (89 50 4E 47 0D 0A 1A 0A)
//! Bytes  8-11: IHDR chunk length
//! Bytes 12-15: "IHDR"
//! Bytes 16-19: Width (u32, big-endian)
//! Bytes 20-23: Height (u32, big-endian)
//! ```
//!
//! Only the low 16 bits of each dimension are read, so a width or height of
//! 65536 or more comes back modulo 65536.

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{ImageFormat, ImageInfo};

/// From the end of the 3-byte signature to the low half of the width field.
const SKIP_TO_WIDTH_LOW: u64 = 15;

/// High half of the height field.
const SKIP_TO_HEIGHT_LOW: u64 = 2;

/// Parse a PNG header. The cursor must sit right after `89 50 4E`.
pub fn parse<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<ImageInfo, ProbeError> {
    cursor.skip(SKIP_TO_WIDTH_LOW)?;
    let width = cursor.read_u16(ByteOrder::BigEndian)?;
    cursor.skip(SKIP_TO_HEIGHT_LOW)?;
    let height = cursor.read_u16(ByteOrder::BigEndian)?;

    ImageInfo::new(
        u32::from(width),
        u32::from(height),
        ImageFormat::Png,
    )
}
