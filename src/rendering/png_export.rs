use std::io::Cursor;
use std::path::Path;

use photo_quant::Palette;

use crate::error::RenderError;

/// Encode palette indices as an 8-bit indexed PNG.
///
/// The PLTE chunk carries all 192 palette entries with the 6-bit register
/// values expanded to 8 bits, so sprite and photo slots both display.
pub fn encode_indexed_png(
    width: u32,
    height: u32,
    indices: &[u8],
    palette: &Palette,
) -> Result<Vec<u8>, RenderError> {
    if indices.len() != width as usize * height as usize {
        return Err(RenderError::BufferSize {
            len: indices.len(),
            width,
            height,
        });
    }

    let plte = palette.to_rgb8_bytes();
    let png_bytes = encode_png(width, height, &plte, indices)?;

    // Re-compress with oxipng; the fast encoding is still a valid PNG.
    let optimized = match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => optimized,
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping fast encoding");
            png_bytes
        }
    };
    tracing::debug!(width, height, bytes = optimized.len(), "Encoded PNG");
    Ok(optimized)
}

/// Encode and write an indexed PNG file.
pub fn write_indexed_png(
    path: &Path,
    width: u32,
    height: u32,
    indices: &[u8],
    palette: &Palette,
) -> Result<(), RenderError> {
    let bytes = encode_indexed_png(width, height, indices, palette)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn encode_png(width: u32, height: u32, plte: &[u8], data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_quant::{quantize, Rgb565, PHOTO_BASE};

    /// Decode to 8-bit RGB, whatever layout oxipng settled on.
    fn decode_rgb(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        assert_eq!(info.color_type, png::ColorType::Rgb);
        (info.width, info.height, buf)
    }

    #[test]
    fn test_png_roundtrip_colors() {
        let palette = Palette::with_rgb222_sprites();
        let indices: Vec<u8> = (0..12).collect();
        let bytes = encode_indexed_png(4, 3, &indices, &palette).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let (width, height, rgb) = decode_rgb(&bytes);
        assert_eq!((width, height), (4, 3));

        let expected: Vec<u8> = indices
            .iter()
            .flat_map(|&i| palette.get(i).unwrap().to_rgb8())
            .collect();
        assert_eq!(rgb, expected);
    }

    #[test]
    fn test_palette_expanded_to_8bit() {
        let mut palette = Palette::with_rgb222_sprites();
        let quantized = quantize(&[Rgb565::new(0xFFFF)], 1, 1).unwrap();
        palette.load_photo(quantized.palette());

        let plte = palette.to_rgb8_bytes();
        assert_eq!(plte.len(), 192 * 3);
        let base = PHOTO_BASE as usize * 3;
        // 62, 63, 62 register values
        assert_eq!(&plte[base..base + 3], &[0xFB, 0xFF, 0xFB]);
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let result = encode_indexed_png(4, 4, &[0; 10], &Palette::new());
        assert!(matches!(result, Err(RenderError::BufferSize { len: 10, .. })));
    }
}
