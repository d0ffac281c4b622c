use thiserror::Error;

/// Errors that can occur while probing an image header.
///
/// A probe either returns a complete [`ImageInfo`](crate::ImageInfo) or one of
/// these variants; no partially populated result is ever handed back.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Leading bytes match no known signature, or a format-specific marker
    /// (JPEG SOF, TIFF width/height tags) was never found.
    #[error("Unsupported format: {reason}")]
    UnsupportedFormat { reason: String },

    /// The byte source ended before the parser had the bytes it needed.
    #[error("Truncated stream: needed {needed} more byte(s) at offset {offset}")]
    TruncatedStream { offset: u64, needed: u64 },

    /// The underlying source failed for a reason other than end-of-stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Integer width other than 2 or 4 bytes requested from a cursor.
    #[error("Invalid integer width: {0} (expected 2 or 4)")]
    InvalidWidth(usize),
}

impl ProbeError {
    /// Shorthand for building an [`ProbeError::UnsupportedFormat`].
    pub fn unsupported(reason: impl Into<String>) -> Self {
        ProbeError::UnsupportedFormat {
            reason: reason.into(),
        }
    }

    /// Whether this error means the input is not a recognised image.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ProbeError::UnsupportedFormat { .. })
    }

    /// Whether this error means the input ended too early.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ProbeError::TruncatedStream { .. })
    }
}
