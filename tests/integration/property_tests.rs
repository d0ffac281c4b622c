//! Property tests over generated headers.

use proptest::prelude::*;

use pixel_probe::{probe_bytes, ImageFormat};

use super::test_utils::{
    bmp_header, gif_header, jpeg_header, png_header, simple_tiff, tiff_header, ByteOrderType,
    TiffEntry,
};

/// Bytes each parser needs, counted from the start of the stream.
const GIF_REQUIRED: usize = 10;
const PNG_REQUIRED: usize = 24;
const BMP_REQUIRED: usize = 23;
const TIFF_REQUIRED: usize = 8 + 2 + 12 * 2;
const JPEG_REQUIRED: usize = 2 + 18 + 71 + 9;

fn byte_order() -> impl Strategy<Value = ByteOrderType> {
    prop_oneof![
        Just(ByteOrderType::LittleEndian),
        Just(ByteOrderType::BigEndian)
    ]
}

proptest! {
    #[test]
    fn gif_dimensions_exact(width in 1u16..=u16::MAX, height in 1u16..=u16::MAX) {
        let info = probe_bytes(&gif_header(width, height)).unwrap();
        prop_assert_eq!(info.dimensions(), (u32::from(width), u32::from(height)));
        prop_assert_eq!(info.format(), ImageFormat::Gif);
    }

    #[test]
    fn jpeg_dimensions_exact(width in 1u16..=u16::MAX, height in 1u16..=u16::MAX) {
        let info = probe_bytes(&jpeg_header(width, height)).unwrap();
        prop_assert_eq!(info.dimensions(), (u32::from(width), u32::from(height)));
    }

    #[test]
    fn png_dimensions_modulo_65536(width in any::<u32>(), height in any::<u32>()) {
        let result = probe_bytes(&png_header(width, height));
        if width % 65536 == 0 || height % 65536 == 0 {
            prop_assert!(result.unwrap_err().is_unsupported());
        } else {
            prop_assert_eq!(result.unwrap().dimensions(), (width % 65536, height % 65536));
        }
    }

    #[test]
    fn png_small_dimensions_exact(width in 1u32..65536, height in 1u32..65536) {
        let info = probe_bytes(&png_header(width, height)).unwrap();
        prop_assert_eq!(info.dimensions(), (width, height));
    }

    #[test]
    fn bmp_dimensions_modulo_65536(width in any::<u32>(), height in any::<u32>()) {
        let result = probe_bytes(&bmp_header(width, height));
        if width % 65536 == 0 || height % 65536 == 0 {
            prop_assert!(result.unwrap_err().is_unsupported());
        } else {
            let info = result.unwrap();
            prop_assert_eq!(info.dimensions(), (width % 65536, height % 65536));
            prop_assert_eq!(info.format(), ImageFormat::Bmp);
        }
    }

    #[test]
    fn tiff_dimensions_any_order(
        order in byte_order(),
        width in 1u16..=u16::MAX,
        height in 1u32..=u32::MAX,
        height_first in any::<bool>(),
        filler in proptest::collection::vec(258u16..1000, 0..8),
    ) {
        let mut entries: Vec<TiffEntry> = filler.iter().map(|&tag| TiffEntry::short(tag, 1)).collect();
        let width_entry = TiffEntry::short(256, width);
        let height_entry = TiffEntry::long(257, height);
        if height_first {
            entries.insert(0, height_entry);
            entries.push(width_entry);
        } else {
            entries.insert(0, width_entry);
            entries.push(height_entry);
        }

        let info = probe_bytes(&tiff_header(order, 8, &entries)).unwrap();
        prop_assert_eq!(info.dimensions(), (u32::from(width), height));
        prop_assert_eq!(info.format(), ImageFormat::Tiff);
    }

    #[test]
    fn truncated_headers_never_yield_results(fraction in 0.0f64..1.0) {
        let cases = [
            (gif_header(640, 480), GIF_REQUIRED),
            (png_header(640, 480), PNG_REQUIRED),
            (bmp_header(640, 480), BMP_REQUIRED),
            (simple_tiff(ByteOrderType::BigEndian, 640, 480), TIFF_REQUIRED),
        ];

        for (data, required) in cases {
            let keep = (required as f64 * fraction) as usize;
            let err = probe_bytes(&data[..keep]).unwrap_err();
            prop_assert!(err.is_truncated(), "cut at {}: {}", keep, err);
        }

        let jpeg = jpeg_header(640, 480);
        let keep = (JPEG_REQUIRED as f64 * fraction) as usize;
        prop_assert!(probe_bytes(&jpeg[..keep]).is_err());
    }

    #[test]
    fn arbitrary_bytes_do_not_panic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = probe_bytes(&data);
    }
}

#[test]
fn test_required_lengths_are_sufficient() {
    assert!(probe_bytes(&gif_header(1, 1)[..GIF_REQUIRED]).is_ok());
    assert!(probe_bytes(&png_header(1, 1)[..PNG_REQUIRED]).is_ok());
    assert!(probe_bytes(&bmp_header(1, 1)[..BMP_REQUIRED]).is_ok());
    assert!(probe_bytes(&simple_tiff(ByteOrderType::LittleEndian, 1, 1)[..TIFF_REQUIRED]).is_ok());
    assert!(probe_bytes(&jpeg_header(1, 1)[..JPEG_REQUIRED]).is_ok());
}
