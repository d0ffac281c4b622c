//! # pixel-probe
//!
//! Reads the pixel dimensions and encoded format of an image from its leading
//! bytes, without decoding any pixel data.
//!
//! Supported formats are GIF, JPEG, PNG, BMP and TIFF. Only the header bytes
//! are consumed, so probing a multi-gigabyte file costs a few dozen bytes of
//! I/O for most formats (JPEG and TIFF read up to the frame header or first
//! directory).
//!
//! ## Architecture
//!
//! - [`io`] - Forward-only byte cursors over buffers and streams
//! - [`mod@format`] - Signature detection and per-format header parsers
//! - [`probe`] - Entry points tying detection to parsing
//! - [`batch`] - Concurrent probing of many files
//! - [`report`] - Per-file results for text and JSON output
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust
//! use pixel_probe::{probe_bytes, ImageFormat};
//!
//! let header = b"GIF89a\x64\x00\x32\x00";
//! let info = probe_bytes(header).unwrap();
//!
//! assert_eq!(info.format(), ImageFormat::Gif);
//! assert_eq!((info.width(), info.height()), (100, 50));
//! assert_eq!(info.mime_type(), "image/gif");
//! ```
//!
//! ## Limitations
//!
//! PNG and BMP dimensions are read from the low 16 bits of their 4-byte
//! fields, so values of 65536 or more are reported modulo 65536. A value
//! that wraps to zero is rejected as unsupported, like any zero dimension.
//! JPEG dimensions come only from SOF0, SOF1 or SOF2 frames.
//!
//! BMP width is read starting 15 bytes after the 2-byte `BM` signature,
//! at file offset 17. Files with a standard BITMAPINFOHEADER keep the width
//! at offset 18, so their dimensions come back wrong: a 1920x1080 bitmap
//! reads as 32768x14336.

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod probe;
pub mod report;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::ProbeError;
pub use format::{detect_signature, sniff, ImageFormat, ImageInfo, Signature};
pub use io::{ByteCursor, ByteOrder, SliceCursor, StreamCursor};
pub use probe::{
    probe, probe_bytes, probe_path, probe_path_limited, probe_reader, probe_reader_limited,
};
pub use report::ProbeReport;
