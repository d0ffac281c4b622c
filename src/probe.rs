//! Entry points for probing an image header.
//!
//! [`probe`] is the engine: it detects the signature and dispatches to the
//! matching format parser. The other functions wrap common byte sources in a
//! cursor and call it.
//!
//! Every call owns its source for the duration of the probe and shares no
//! state with other calls, so independent sources can be probed in parallel.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::ProbeError;
use crate::format::{bmp, detect_signature, gif, jpeg, png, tiff, ImageInfo, Signature};
use crate::io::{ByteCursor, SliceCursor, StreamCursor};

/// Detect the format at the cursor and read the image dimensions.
///
/// The cursor must be positioned at the first byte of the image.
///
/// # Errors
/// - `UnsupportedFormat` if no signature matches, or the format's required
///   marker or tags are never found
/// - `TruncatedStream` if the source ends before the header is complete
/// - `Io` if the underlying source fails
pub fn probe<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<ImageInfo, ProbeError> {
    let signature = detect_signature(cursor)?;

    let info = match signature {
        Signature::Gif => gif::parse(cursor),
        Signature::Jpeg => jpeg::parse(cursor),
        Signature::Png => png::parse(cursor),
        Signature::Bmp => bmp::parse(cursor),
        Signature::Tiff(byte_order) => tiff::parse(cursor, byte_order),
    }?;

    debug!(
        format = info.format().name(),
        width = info.width(),
        height = info.height(),
        bytes_read = cursor.position(),
        "Probed image header"
    );

    Ok(info)
}

/// Probe an in-memory buffer.
pub fn probe_bytes(bytes: &[u8]) -> Result<ImageInfo, ProbeError> {
    probe(&mut SliceCursor::new(bytes))
}

/// Probe any readable stream. Only the header bytes are consumed.
pub fn probe_reader<R: Read>(reader: R) -> Result<ImageInfo, ProbeError> {
    probe(&mut StreamCursor::new(reader))
}

/// Probe a stream, reading at most `max_bytes`.
///
/// A header that would need more than `max_bytes` fails with
/// `TruncatedStream`, which gives callers a bound on work per probe (a JPEG
/// with huge metadata segments, or a TIFF whose IFD sits far into the file).
pub fn probe_reader_limited<R: Read>(reader: R, max_bytes: u64) -> Result<ImageInfo, ProbeError> {
    probe_reader(reader.take(max_bytes))
}

/// Probe a file on disk. The file is closed before returning.
pub fn probe_path<P: AsRef<Path>>(path: P) -> Result<ImageInfo, ProbeError> {
    let file = File::open(path.as_ref())?;
    probe_reader(BufReader::new(file))
}

/// Probe a file on disk, reading at most `max_bytes`.
pub fn probe_path_limited<P: AsRef<Path>>(
    path: P,
    max_bytes: u64,
) -> Result<ImageInfo, ProbeError> {
    let file = File::open(path.as_ref())?;
    probe_reader_limited(BufReader::new(file), max_bytes)
}
