//! GIF logical screen descriptor.
//!
//! ```text
//! Bytes 0-2: "GIF"
//! Bytes 3-5: Version ("87a" / "89a")
//! Bytes 6-7: Logical screen width (u16, little-endian)
//! Bytes 8-9: Logical screen height (u16, little-endian)
//! ```

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{ImageFormat, ImageInfo};

/// Length of the version field following the "GIF" signature.
const VERSION_LEN: u64 = 3;

/// Parse a GIF header. The cursor must sit right after "GIF".
pub fn parse<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<ImageInfo, ProbeError> {
    cursor.skip(VERSION_LEN)?;
    let width = cursor.read_u16(ByteOrder::LittleEndian)?;
    let height = cursor.read_u16(ByteOrder::LittleEndian)?;

    ImageInfo::new(
        u32::from(width),
        u32::from(height),
        ImageFormat::Gif,
    )
}
