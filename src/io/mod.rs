//! Byte-level I/O for header parsing.
//!
//! Every parser reads through a [`ByteCursor`], a forward-only view over the
//! caller's byte source. Two implementations are provided: [`SliceCursor`] for
//! in-memory buffers and [`StreamCursor`] for anything implementing
//! [`std::io::Read`].

mod byte_order;
mod cursor;

pub use byte_order::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteOrder};
pub use cursor::{ByteCursor, SliceCursor, StreamCursor};
