//! TIFF first-IFD walk.
//!
//! # TIFF Header Structure
//!
//! ```text
//! Bytes 0-1: Byte order ("II" little-endian, "MM" big-endian)
//! Bytes 2-3: Version (42)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```
//!
//! # IFD Structure
//!
//! ```text
//! Entry count (u16)
//! Entries, 12 bytes each:
//!   Tag (u16), field type (u16), count (u32), value or offset (4 bytes)
//! ```
//!
//! SHORT and SSHORT values sit in the first two bytes of the value slot.
//! Everything else is read as a full 4-byte integer.

use tracing::trace;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};
use crate::format::{ImageFormat, ImageInfo};

use super::tags::{FieldType, TiffTag, VALUE_SLOT_SIZE};

// =============================================================================
// Constants
// =============================================================================

/// Size of classic TIFF header in bytes
pub const TIFF_HEADER_SIZE: u64 = 8;

/// Size of one IFD entry in bytes
pub const IFD_ENTRY_SIZE: u64 = 12;

// =============================================================================
// IfdEntry
// =============================================================================

/// A single 12-byte IFD entry as read from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Raw tag ID
    pub tag: u16,

    /// Raw field type
    pub field_type: u16,

    /// Number of values (read but not interpreted)
    pub count: u32,

    /// Inline value; 2-byte types are widened
    pub value: u32,
}

impl IfdEntry {
    /// Read the next entry from the cursor in the given byte order.
    pub fn read<C: ByteCursor + ?Sized>(
        cursor: &mut C,
        byte_order: ByteOrder,
    ) -> Result<Self, ProbeError> {
        let tag = cursor.read_u16(byte_order)?;
        let field_type = cursor.read_u16(byte_order)?;
        let count = cursor.read_u32(byte_order)?;

        let size = FieldType::value_size(field_type);
        let value = cursor.read_uint(size, byte_order)?;
        cursor.skip((VALUE_SLOT_SIZE - size) as u64)?;

        Ok(IfdEntry {
            tag,
            field_type,
            count,
            value,
        })
    }

    /// The tag, if it is one we look for.
    #[inline]
    pub fn known_tag(&self) -> Option<TiffTag> {
        TiffTag::from_u16(self.tag)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Walk the first IFD for ImageWidth and ImageLength.
///
/// The cursor must sit right after the 4-byte signature, whose byte order is
/// passed in. Scanning stops as soon as both tags have been seen, in any order.
///
/// # Errors
/// - `UnsupportedFormat` if the IFD offset points back into the header
/// - `UnsupportedFormat` if the directory ends without both tags
/// - `TruncatedStream` if the stream ends before the directory does
pub fn parse<C: ByteCursor + ?Sized>(
    cursor: &mut C,
    byte_order: ByteOrder,
) -> Result<ImageInfo, ProbeError> {
    let ifd_offset = cursor.read_u32(byte_order)?;
    let gap = u64::from(ifd_offset)
        .checked_sub(TIFF_HEADER_SIZE)
        .ok_or_else(|| {
            ProbeError::unsupported(format!(
                "TIFF IFD offset {} points inside the header",
                ifd_offset
            ))
        })?;
    cursor.skip(gap)?;

    let entry_count = cursor.read_u16(byte_order)?;
    let mut width = None;
    let mut height = None;

    for index in 0..entry_count {
        let entry = IfdEntry::read(cursor, byte_order)?;
        trace!(
            index,
            tag = entry.tag,
            field_type = entry.field_type,
            value = entry.value,
            "TIFF IFD entry"
        );

        match entry.known_tag() {
            Some(TiffTag::ImageWidth) => width = Some(entry.value),
            Some(TiffTag::ImageLength) => height = Some(entry.value),
            None => {}
        }

        if let (Some(width), Some(height)) = (width, height) {
            return ImageInfo::new(width, height, ImageFormat::Tiff);
        }
    }

    let missing: Vec<&str> = [
        (width, TiffTag::ImageWidth),
        (height, TiffTag::ImageLength),
    ]
    .iter()
    .filter(|(value, _)| value.is_none())
    .map(|(_, tag)| tag.name())
    .collect();

    Err(ProbeError::unsupported(format!(
        "TIFF directory with {} entries is missing {}",
        entry_count,
        missing.join(" and ")
    )))
}

// =============================================================================
// Tests
// =============================================================================
