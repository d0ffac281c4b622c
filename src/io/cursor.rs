use std::io::{self, ErrorKind, Read};

use crate::error::ProbeError;

use super::ByteOrder;

/// Forward-only reader over a byte source.
///
/// This abstraction lets every header parser be written once against the
/// capability instead of a concrete source type. Implementations never rewind:
/// [`position`](ByteCursor::position) only grows.
///
/// Reading past the end of the source fails with
/// [`ProbeError::TruncatedStream`]; it never yields a made-up value.
pub trait ByteCursor {
    /// Fill `buf` completely from the source.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ProbeError>;

    /// Discard exactly `n` bytes.
    fn skip(&mut self, n: u64) -> Result<(), ProbeError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8, ProbeError> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a 2-byte unsigned integer in the given byte order.
    fn read_u16(&mut self, order: ByteOrder) -> Result<u16, ProbeError> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(order.read_u16(&buf))
    }

    /// Read a 4-byte unsigned integer in the given byte order.
    fn read_u32(&mut self, order: ByteOrder) -> Result<u32, ProbeError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(order.read_u32(&buf))
    }

    /// Read an unsigned integer of `width` bytes (2 or 4).
    fn read_uint(&mut self, width: usize, order: ByteOrder) -> Result<u32, ProbeError> {
        match width {
            2 => self.read_u16(order).map(u32::from),
            4 => self.read_u32(order),
            other => Err(ProbeError::InvalidWidth(other)),
        }
    }
}

// =============================================================================
// StreamCursor
// =============================================================================

/// Cursor over any [`Read`] implementation (files, sockets, pipes).
///
/// Skips are drained through a sink rather than seeking, so non-seekable
/// streams work the same as files.
#[derive(Debug)]
pub struct StreamCursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read> StreamCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }
}

impl<R: Read> ByteCursor for StreamCursor<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ProbeError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.position += filled as u64;
                    return Err(ProbeError::TruncatedStream {
                        offset: self.position,
                        needed: (buf.len() - filled) as u64,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.position += filled as u64;
                    return Err(ProbeError::Io(e));
                }
            }
        }
        self.position += filled as u64;
        Ok(())
    }

    fn skip(&mut self, n: u64) -> Result<(), ProbeError> {
        let skipped = io::copy(&mut (&mut self.inner).take(n), &mut io::sink())?;
        self.position += skipped;
        if skipped < n {
            return Err(ProbeError::TruncatedStream {
                offset: self.position,
                needed: n - skipped,
            });
        }
        Ok(())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }
}

// =============================================================================
// SliceCursor
// =============================================================================

/// Zero-copy cursor over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn truncated(&mut self, wanted: u64) -> ProbeError {
        let available = (self.data.len() - self.pos) as u64;
        self.pos = self.data.len();
        ProbeError::TruncatedStream {
            offset: self.data.len() as u64,
            needed: wanted - available,
        }
    }
}

impl ByteCursor for SliceCursor<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ProbeError> {
        let end = self.pos + buf.len();
        if end > self.data.len() {
            return Err(self.truncated(buf.len() as u64));
        }
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn skip(&mut self, n: u64) -> Result<(), ProbeError> {
        let available = (self.data.len() - self.pos) as u64;
        if n > available {
            return Err(self.truncated(n));
        }
        // n <= available, which already fits in usize
        self.pos += n as usize;
        Ok(())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.pos as u64
    }
}
