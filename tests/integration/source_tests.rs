//! Byte source integration tests.
//!
//! Tests verify:
//! - Streams are consumed only up to the end of the header
//! - File sources are probed and bounded reads are enforced
//! - Independent probes run in parallel without coordination

use std::fs;
use std::io::Cursor;
use std::thread;

use pixel_probe::batch::probe_paths;
use pixel_probe::{
    probe, probe_bytes, probe_path, probe_path_limited, probe_reader, probe_reader_limited,
    ImageFormat, ProbeError, StreamCursor,
};

use super::test_utils::{
    bmp_header, gif_header, jpeg_header, png_header, simple_tiff, tiff_header, ByteOrderType,
    ChunkedReader, TiffEntry,
};

#[test]
fn test_stream_consumes_only_header() {
    let mut data = png_header(320, 240);
    data.extend(std::iter::repeat(0u8).take(10_000));

    let mut reader = ChunkedReader::new(data, 3);
    let info = probe_reader(&mut reader).unwrap();

    assert_eq!(info.dimensions(), (320, 240));
    assert_eq!(reader.consumed(), 24);
}

#[test]
fn test_stream_matches_buffer_for_every_format() {
    let samples = [
        gif_header(11, 12),
        jpeg_header(13, 14),
        png_header(15, 16),
        bmp_header(17, 18),
        simple_tiff(ByteOrderType::BigEndian, 19, 20),
    ];

    for data in samples {
        let from_buffer = probe_bytes(&data).unwrap();
        let from_stream = probe_reader(ChunkedReader::new(data.clone(), 1)).unwrap();
        assert_eq!(from_buffer, from_stream);
    }
}

#[test]
fn test_stream_cursor_position_after_probe() {
    let data = jpeg_header(64, 48);
    let mut cursor = StreamCursor::new(Cursor::new(data));
    let info = probe(&mut cursor).unwrap();

    assert_eq!(info.format(), ImageFormat::Jpeg);
    // SOI + APP0 + DQT + frame up to the width field
    assert_eq!(pixel_probe::ByteCursor::position(&cursor), 100);
}

#[test]
fn test_truncated_stream() {
    let data = gif_header(5, 5)[..8].to_vec();
    let err = probe_reader(ChunkedReader::new(data, 2)).unwrap_err();
    assert!(matches!(
        err,
        ProbeError::TruncatedStream {
            offset: 8,
            needed: 2
        }
    ));
}

#[test]
fn test_limited_reader_bounds_tiff_walk() {
    let data = tiff_header(
        ByteOrderType::LittleEndian,
        64 * 1024,
        &[TiffEntry::short(256, 9), TiffEntry::short(257, 9)],
    );

    assert!(probe_reader_limited(Cursor::new(&data), 1024)
        .unwrap_err()
        .is_truncated());
    assert_eq!(
        probe_reader_limited(Cursor::new(&data), 128 * 1024)
            .unwrap()
            .dimensions(),
        (9, 9)
    );
}

#[test]
fn test_probe_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    fs::write(&path, jpeg_header(4000, 3000)).unwrap();

    let info = probe_path(&path).unwrap();
    assert_eq!(info.dimensions(), (4000, 3000));
    assert_eq!(
        info.to_string(),
        "MIME Type : image/jpeg\t Width : 4000\t Height : 3000"
    );

    assert!(probe_path_limited(&path, 16).unwrap_err().is_truncated());
}

#[test]
fn test_probe_path_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = probe_path(dir.path().join("nope.gif")).unwrap_err();
    assert!(matches!(err, ProbeError::Io(_)));
}

#[test]
fn test_parallel_probes() {
    let handles: Vec<_> = (1..=16u16)
        .map(|i| {
            thread::spawn(move || {
                let data = simple_tiff(ByteOrderType::LittleEndian, i * 10, i * 20);
                probe_bytes(&data).map(|info| (i, info.dimensions()))
            })
        })
        .collect();

    for handle in handles {
        let (i, dims) = handle.join().unwrap().unwrap();
        assert_eq!(dims, (u32::from(i) * 10, u32::from(i) * 20));
    }
}

#[tokio::test]
async fn test_probe_paths_mixed_directory() {
    let dir = tempfile::tempdir().unwrap();
    let files = [
        ("a.gif", gif_header(1, 2)),
        ("b.png", png_header(3, 4)),
        ("c.bmp", bmp_header(5, 6)),
        ("d.txt", b"plain text".to_vec()),
        ("e.tif", simple_tiff(ByteOrderType::BigEndian, 7, 8)),
    ];
    let mut paths = Vec::new();
    for (name, data) in &files {
        let path = dir.path().join(name);
        fs::write(&path, data).unwrap();
        paths.push(path);
    }

    let reports = probe_paths(&paths, 4096, 3).await;

    assert_eq!(reports.len(), 5);
    let dims: Vec<Option<(u32, u32)>> = reports
        .iter()
        .map(|r| r.info.map(|info| info.dimensions()))
        .collect();
    assert_eq!(
        dims,
        vec![Some((1, 2)), Some((3, 4)), Some((5, 6)), None, Some((7, 8))]
    );
    assert!(reports[3].path.ends_with("d.txt"));
}
