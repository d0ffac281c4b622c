//! Result types produced by a successful probe.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ProbeError;

// =============================================================================
// ImageFormat
// =============================================================================

/// Encoded format of a probed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// MIME type label, e.g. `"image/png"`.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "image/gif",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Tiff => "image/tiff",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Tiff => "TIFF",
        }
    }

}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

// =============================================================================
// ImageInfo
// =============================================================================

/// Dimensions and format read from an image header.
///
/// Only the probe functions construct this value; once returned it is
/// read-only. Width and height are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageInfo {
    width: u32,
    height: u32,
    format: ImageFormat,
}

impl ImageInfo {
    /// Build the result of a parse, rejecting a zero width or height.
    ///
    /// PNG and BMP dimensions at an exact multiple of 65536 read back as zero
    /// and are rejected here too.
    pub(crate) fn new(width: u32, height: u32, format: ImageFormat) -> Result<Self, ProbeError> {
        if width == 0 || height == 0 {
            return Err(ProbeError::unsupported(format!(
                "{} header declares empty dimensions {}x{}",
                format.name(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            format,
        })
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    #[inline]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// `(width, height)` pair.
    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MIME Type : {}\t Width : {}\t Height : {}",
            self.mime_type(),
            self.width,
            self.height
        )
    }
}

impl Serialize for ImageInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImageInfo", 4)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("mime_type", self.mime_type())?;
        state.end()
    }
}
