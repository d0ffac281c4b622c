//! JPEG frame header scanning.
//!
//! A JPEG stream is a sequence of marker segments after the SOI marker
//! (`FF D8`). Each segment is:
//!
//! ```text
//! 0xFF, marker type, length (u16, big-endian, counts itself), payload
//! ```
//!
//! The image dimensions live in the Start Of Frame segment:
//!
//! ```text
//! precision (1 byte), height (u16 BE), width (u16 BE), ...
//! ```
//!
//! Only SOF0, SOF1 and SOF2 are recognised. Other SOF variants (lossless,
//! arithmetic-coded) are skipped like any other segment.

use tracing::trace;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{ImageFormat, ImageInfo};

// =============================================================================
// JPEG Markers
// =============================================================================

/// Byte introducing every marker.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// Start Of Frame (baseline DCT)
pub const SOF0: u8 = 0xC0;

/// Start Of Frame (extended sequential DCT)
pub const SOF1: u8 = 0xC1;

/// Start Of Frame (progressive DCT)
pub const SOF2: u8 = 0xC2;

/// Size of the segment length field, which the length value includes.
const LENGTH_FIELD_SIZE: u16 = 2;

/// Sample precision byte at the start of the SOF payload.
const PRECISION_SIZE: u64 = 1;

/// Whether `marker` is one of the recognised Start Of Frame markers.
#[inline]
pub const fn is_frame_marker(marker: u8) -> bool {
    matches!(marker, SOF0 | SOF1 | SOF2)
}

// =============================================================================
// Parsing
// =============================================================================

/// Scan marker segments for the first SOF0/SOF1/SOF2 and read its dimensions.
///
/// The cursor must sit right after the SOI marker.
///
/// # Errors
/// - `UnsupportedFormat` if the stream ends, or a byte other than `0xFF`
///   appears, where a marker is expected
/// - `UnsupportedFormat` if a segment length is smaller than its own field
/// - `TruncatedStream` if the stream ends inside a segment
pub fn parse<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<ImageInfo, ProbeError> {
    loop {
        let offset = cursor.position();
        let prefix = match cursor.read_u8() {
            Ok(byte) => byte,
            Err(ProbeError::TruncatedStream { .. }) => {
                return Err(ProbeError::unsupported(
                    "JPEG stream ended before a start-of-frame marker",
                ));
            }
            Err(e) => return Err(e),
        };

        if prefix != MARKER_PREFIX {
            return Err(ProbeError::unsupported(format!(
                "expected JPEG marker at offset {}, found 0x{:02X}",
                offset, prefix
            )));
        }

        let marker = cursor.read_u8()?;
        let length = cursor.read_u16(ByteOrder::BigEndian)?;

        if is_frame_marker(marker) {
            cursor.skip(PRECISION_SIZE)?;
            let height = cursor.read_u16(ByteOrder::BigEndian)?;
            let width = cursor.read_u16(ByteOrder::BigEndian)?;

            return ImageInfo::new(
                u32::from(width),
                u32::from(height),
                ImageFormat::Jpeg,
            );
        }

        let payload = length.checked_sub(LENGTH_FIELD_SIZE).ok_or_else(|| {
            ProbeError::unsupported(format!(
                "JPEG segment 0x{:02X} at offset {} has invalid length {}",
                marker, offset, length
            ))
        })?;

        trace!(marker, offset, length, "skipping JPEG segment");
        cursor.skip(u64::from(payload))?;
    }
}

// =============================================================================
// Tests
// =============================================================================
