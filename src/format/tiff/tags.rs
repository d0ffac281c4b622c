//! TIFF tag and field type definitions.
//!
//! Only the vocabulary needed to locate image dimensions in the first IFD is
//! defined here. Unknown tags and field types are carried as raw numbers by
//! the parser and simply ignored.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// Size in bytes of the value slot in every IFD entry.
pub const VALUE_SLOT_SIZE: usize = 4;

/// Field types whose single value fills only the first two bytes of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 16-bit integer
    Short = 3,

    /// Signed 16-bit integer
    SShort = 8,
}

impl FieldType {
    /// Returns `None` for every type read as a full 4-byte value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            3 => Some(FieldType::Short),
            8 => Some(FieldType::SShort),
            _ => None,
        }
    }

    /// Bytes of the value slot holding the value for a raw field type.
    pub fn value_size(field_type: u16) -> usize {
        match Self::from_u16(field_type) {
            Some(FieldType::Short | FieldType::SShort) => 2,
            None => VALUE_SLOT_SIZE,
        }
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// TIFF tag IDs used for dimension lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    /// Image width in pixels
    ImageWidth = 256,

    /// Image height (length) in pixels
    ImageLength = 257,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            256 => Some(TiffTag::ImageWidth),
            257 => Some(TiffTag::ImageLength),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TiffTag::ImageWidth => "ImageWidth",
            TiffTag::ImageLength => "ImageLength",
        }
    }
}
