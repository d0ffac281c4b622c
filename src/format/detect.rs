//! Format detection from leading magic bytes.
//!
//! Detection is a pure function from a byte prefix to a [`Classification`];
//! [`detect_signature`] feeds it one byte at a time from a cursor so that
//! exactly the signature bytes are consumed and nothing more.
//!
//! | Signature bytes          | Format        |
//! |--------------------------|---------------|
//! | `G` `I` `F`              | GIF           |
//! | `0xFF` `0xD8`            | JPEG          |
//! | `0x89` `P` `N`           | PNG           |
//! | `B` `M`                  | BMP           |
//! | `M` `M` `0x00` `0x2A`    | TIFF (big)    |
//! | `I` `I` `0x2A` `0x00`    | TIFF (little) |

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::ImageFormat;

// =============================================================================
// Signature
// =============================================================================

/// A matched magic-byte signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Gif,
    Jpeg,
    Png,
    Bmp,
    /// TIFF, carrying the byte order declared by "II" / "MM".
    Tiff(ByteOrder),
}

impl Signature {
    pub const fn format(&self) -> ImageFormat {
        match self {
            Signature::Gif => ImageFormat::Gif,
            Signature::Jpeg => ImageFormat::Jpeg,
            Signature::Png => ImageFormat::Png,
            Signature::Bmp => ImageFormat::Bmp,
            Signature::Tiff(_) => ImageFormat::Tiff,
        }
    }
}

/// Longest signature, in bytes.
pub const MAX_SIGNATURE_LEN: usize = 4;

/// Known signatures. No entry is a prefix of another.
const SIGNATURES: [(&[u8], Signature); 6] = [
    (b"GIF", Signature::Gif),
    (&[0xFF, 0xD8], Signature::Jpeg),
    (&[0x89, b'P', b'N'], Signature::Png),
    (b"BM", Signature::Bmp),
    (&[b'M', b'M', 0x00, 0x2A], Signature::Tiff(ByteOrder::BigEndian)),
    (&[b'I', b'I', 0x2A, 0x00], Signature::Tiff(ByteOrder::LittleEndian)),
];

// =============================================================================
// Classification
// =============================================================================

/// Outcome of classifying a byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The prefix starts with a complete signature.
    Match(Signature),
    /// The prefix is the start of at least one signature; more bytes are needed.
    NeedMore,
    /// No signature can start with this prefix.
    NoMatch,
}

/// Classify a byte prefix against the known signatures.
pub fn classify(prefix: &[u8]) -> Classification {
    if prefix.is_empty() {
        return Classification::NeedMore;
    }

    let mut viable = false;
    for (magic, signature) in SIGNATURES.iter() {
        if prefix.starts_with(magic) {
            return Classification::Match(*signature);
        }
        if magic.starts_with(prefix) {
            viable = true;
        }
    }

    if viable {
        Classification::NeedMore
    } else {
        Classification::NoMatch
    }
}

/// Identify the format of an in-memory header without consuming anything.
///
/// Returns `None` when the bytes match no signature or are too short to tell.
pub fn sniff(bytes: &[u8]) -> Option<Signature> {
    match classify(&bytes[..bytes.len().min(MAX_SIGNATURE_LEN)]) {
        Classification::Match(signature) => Some(signature),
        Classification::NeedMore | Classification::NoMatch => None,
    }
}

/// Read the signature from the front of a cursor.
///
/// Consumes exactly the signature bytes on success, leaving the cursor at the
/// first byte the format parser needs.
///
/// # Errors
/// - `UnsupportedFormat` once the bytes read can no longer start any signature
/// - `TruncatedStream` if the source ends while a signature is still possible
pub fn detect_signature<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<Signature, ProbeError> {
    let mut prefix = [0u8; MAX_SIGNATURE_LEN];

    for len in 1..=MAX_SIGNATURE_LEN {
        prefix[len - 1] = cursor.read_u8()?;
        match classify(&prefix[..len]) {
            Classification::Match(signature) => return Ok(signature),
            Classification::NeedMore => continue,
            Classification::NoMatch => {
                return Err(ProbeError::unsupported(format!(
                    "unrecognised leading bytes {:02X?}",
                    &prefix[..len]
                )));
            }
        }
    }

    // Every signature is at most MAX_SIGNATURE_LEN bytes, so a viable prefix of
    // that length is always a match.
    Err(ProbeError::unsupported("unrecognised leading bytes"))
}

// =============================================================================
// Tests
// =============================================================================
