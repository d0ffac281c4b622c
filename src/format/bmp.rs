//! BMP dimensions.
//!
//! Same strategy as PNG with little-endian fields: after the 2-byte "BM"
//! signature, 15 bytes are skipped, the low half of the width is read, the
//! high half skipped, then the low half of the height read.
//!
//! Dimensions of 65536 or more come back modulo 65536.

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{ImageFormat, ImageInfo};

/// From the end of "BM" to the low half of the width field.
const SKIP_TO_WIDTH_LOW: u64 = 15;

/// High half of the width field.
const SKIP_TO_HEIGHT_LOW: u64 = 2;

/// Parse a BMP header. The cursor must sit right after "BM".
pub fn parse<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<ImageInfo, ProbeError> {
    cursor.skip(SKIP_TO_WIDTH_LOW)?;
    let width = cursor.read_u16(ByteOrder::LittleEndian)?;
    cursor.skip(SKIP_TO_HEIGHT_LOW)?;
    let height = cursor.read_u16(ByteOrder::LittleEndian)?;

    ImageInfo::new(
        u32::from(width),
        u32::from(height),
        ImageFormat::Bmp,
    )
}
