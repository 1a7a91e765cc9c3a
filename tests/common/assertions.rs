//! Assertion helpers for tests.

use photo_quant::{IndexedPhoto, PHOTO_BASE};
use pretty_assertions::assert_eq;
use std::io::Cursor;

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Decode a PNG to 8-bit RGB triples
pub fn decode_png_rgb(bytes: &[u8]) -> (u32, u32, Vec<[u8; 3]>) {
    assert_png(bytes);
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    let pixels = match info.color_type {
        png::ColorType::Rgb => buf.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| [v, v, v]).collect(),
        other => panic!("Unexpected decoded color type {other:?}"),
    };
    (info.width, info.height, pixels)
}

/// Assert every index of a quantized photo is in the photo block
pub fn assert_photo_block(photo: &IndexedPhoto) {
    for (i, &index) in photo.indices().iter().enumerate() {
        assert!(
            (PHOTO_BASE..PHOTO_BASE + 128).contains(&index),
            "Index {index} at pixel {i} outside photo block"
        );
    }
}

/// Assert two index buffers are equal, with a readable diff
pub fn assert_indices_eq(actual: &[u8], expected: &[u8]) {
    assert_eq!(actual, expected);
}
