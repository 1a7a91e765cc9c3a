//! Photo and sprite file formats.
//!
//! Both formats start with a little-endian `u16 width, u16 height` header.
//! Photos follow it with one little-endian 5:6:5 `u16` per pixel; sprites
//! with one palette-index byte per pixel. Rows are stored bottom row first
//! and flipped on load, so in memory row 0 is the top of the image.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use photo_quant::{quantize, QuantizedPhoto, Rgb565, SpriteImage};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

const HEADER_LEN: usize = 4;

/// Largest images the loaders accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderLimits {
    pub photo_width: usize,
    pub photo_height: usize,
    pub sprite_width: usize,
    pub sprite_height: usize,
}

impl Default for LoaderLimits {
    fn default() -> Self {
        Self {
            photo_width: 1024,
            photo_height: 1024,
            sprite_width: 160,
            sprite_height: 100,
        }
    }
}

/// A decoded photo: dimensions plus top-row-first pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPhoto {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb565>,
}

fn parse_header(
    bytes: &[u8],
    max_width: usize,
    max_height: usize,
) -> Result<(usize, usize), LoadError> {
    if bytes.len() < HEADER_LEN {
        return Err(LoadError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    let width = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    let height = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;
    if width > max_width || height > max_height {
        return Err(LoadError::TooLarge {
            width,
            height,
            max_width,
            max_height,
        });
    }
    Ok((width, height))
}

fn check_body(bytes: &[u8], expected: usize) -> Result<&[u8], LoadError> {
    let body = &bytes[HEADER_LEN..];
    if body.len() < expected {
        return Err(LoadError::Truncated {
            expected: HEADER_LEN + expected,
            actual: bytes.len(),
        });
    }
    if body.len() > expected {
        tracing::debug!(
            extra = body.len() - expected,
            "Ignoring trailing bytes after image data"
        );
    }
    Ok(&body[..expected])
}

fn encode_header(width: usize, height: usize) -> Result<[u8; HEADER_LEN], LoadError> {
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(LoadError::HeaderOverflow { width, height }),
    };
    let [w0, w1] = w.to_le_bytes();
    let [h0, h1] = h.to_le_bytes();
    Ok([w0, w1, h0, h1])
}

/// Decode a photo file image held in memory.
pub fn parse_photo(bytes: &[u8], limits: &LoaderLimits) -> Result<RawPhoto, LoadError> {
    let (width, height) = parse_header(bytes, limits.photo_width, limits.photo_height)?;
    let body = check_body(bytes, width * height * 2)?;

    let mut pixels = vec![Rgb565::new(0); width * height];
    if width > 0 {
        // The file's first row is the photo's bottom row.
        for (file_row, row) in body.chunks_exact(width * 2).enumerate() {
            let y = height - 1 - file_row;
            let dest = &mut pixels[y * width..(y + 1) * width];
            for (out, sample) in dest.iter_mut().zip(row.chunks_exact(2)) {
                *out = Rgb565::new(u16::from_le_bytes([sample[0], sample[1]]));
            }
        }
    }

    Ok(RawPhoto {
        width,
        height,
        pixels,
    })
}

/// Read a photo file.
pub fn read_photo(path: &Path, limits: &LoaderLimits) -> Result<RawPhoto, LoadError> {
    let bytes = fs::read(path)?;
    let photo = parse_photo(&bytes, limits)?;
    tracing::debug!(
        path = %path.display(),
        width = photo.width,
        height = photo.height,
        "Read photo"
    );
    Ok(photo)
}

/// Read and quantize a photo file in one step.
pub fn load_photo(path: &Path, limits: &LoaderLimits) -> Result<QuantizedPhoto, LoadError> {
    let raw = read_photo(path, limits)?;
    let quantized = quantize(&raw.pixels, raw.width, raw.height)?;
    let stats = quantized.stats();
    tracing::info!(
        path = %path.display(),
        width = raw.width,
        height = raw.height,
        fine_buckets = stats.fine_buckets_used,
        coarse_buckets = stats.coarse_buckets_used,
        promoted_pixels = stats.promoted_pixels,
        "Quantized photo"
    );
    Ok(quantized)
}

/// Encode a photo in the on-disk format.
pub fn encode_photo(width: usize, height: usize, pixels: &[Rgb565]) -> Result<Vec<u8>, LoadError> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(photo_quant::QuantizeError::DimensionMismatch {
            len: pixels.len(),
            width,
            height,
        }
        .into());
    }
    let mut out = Vec::with_capacity(HEADER_LEN + pixels.len() * 2);
    out.extend_from_slice(&encode_header(width, height)?);
    if width > 0 {
        for row in pixels.chunks_exact(width).rev() {
            for pixel in row {
                out.extend_from_slice(&pixel.raw().to_le_bytes());
            }
        }
    }
    Ok(out)
}

/// Write a photo file.
pub fn write_photo(
    path: &Path,
    width: usize,
    height: usize,
    pixels: &[Rgb565],
) -> Result<(), LoadError> {
    fs::write(path, encode_photo(width, height, pixels)?)?;
    Ok(())
}

/// Decode a sprite file image held in memory.
pub fn parse_sprite(bytes: &[u8], limits: &LoaderLimits) -> Result<SpriteImage, LoadError> {
    let (width, height) = parse_header(bytes, limits.sprite_width, limits.sprite_height)?;
    let body = check_body(bytes, width * height)?;

    let mut pixels = Vec::with_capacity(width * height);
    if width > 0 {
        for row in body.chunks_exact(width).rev() {
            pixels.extend_from_slice(row);
        }
    }
    Ok(SpriteImage::new(pixels, width, height)?)
}

/// Read a sprite file.
pub fn read_sprite(path: &Path, limits: &LoaderLimits) -> Result<Arc<SpriteImage>, LoadError> {
    let bytes = fs::read(path)?;
    let sprite = parse_sprite(&bytes, limits)?;
    tracing::debug!(
        path = %path.display(),
        width = sprite.width(),
        height = sprite.height(),
        "Read sprite"
    );
    Ok(Arc::new(sprite))
}

/// Encode a sprite in the on-disk format.
pub fn encode_sprite(sprite: &SpriteImage) -> Result<Vec<u8>, LoadError> {
    let mut out = Vec::with_capacity(HEADER_LEN + sprite.pixels().len());
    out.extend_from_slice(&encode_header(sprite.width(), sprite.height())?);
    if sprite.width() > 0 {
        for row in sprite.pixels().chunks_exact(sprite.width()).rev() {
            out.extend_from_slice(row);
        }
    }
    Ok(out)
}

/// Write a sprite file.
pub fn write_sprite(path: &Path, sprite: &SpriteImage) -> Result<(), LoadError> {
    fs::write(path, encode_sprite(sprite)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_rows_are_flipped() {
        // 2x2, file rows: bottom [1, 2], top [3, 4]
        let bytes = [2, 0, 2, 0, 1, 0, 2, 0, 3, 0, 4, 0];
        let photo = parse_photo(&bytes, &LoaderLimits::default()).unwrap();

        let raw: Vec<u16> = photo.pixels.iter().map(|p| p.raw()).collect();
        assert_eq!(raw, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sprite_rows_are_flipped() {
        let bytes = [3, 0, 2, 0, 1, 2, 3, 4, 5, 6];
        let sprite = parse_sprite(&bytes, &LoaderLimits::default()).unwrap();
        assert_eq!(sprite.pixels(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_short_header() {
        let err = parse_photo(&[1, 0, 1], &LoaderLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Truncated {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_truncated_body() {
        let bytes = [2, 0, 1, 0, 0xFF, 0xFF];
        let err = parse_photo(&bytes, &LoaderLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Truncated {
                expected: 8,
                actual: 6
            }
        ));
    }

    #[test]
    fn test_oversized_sprite_rejected() {
        // 161 wide exceeds the default sprite limit of 160.
        let bytes = [161, 0, 1, 0];
        let err = parse_sprite(&bytes, &LoaderLimits::default()).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { width: 161, .. }));
    }

    #[test]
    fn test_limits_are_configurable() {
        let limits = LoaderLimits {
            photo_width: 1,
            photo_height: 1,
            ..Default::default()
        };
        let bytes = encode_photo(2, 1, &[Rgb565::new(0); 2]).unwrap();
        assert!(parse_photo(&bytes, &limits).is_err());
        assert!(parse_photo(&bytes, &LoaderLimits::default()).is_ok());
    }

    #[test]
    fn test_encode_photo_rejects_mismatch() {
        assert!(matches!(
            encode_photo(3, 3, &[Rgb565::new(0); 4]),
            Err(LoadError::Quantize(_))
        ));
    }

    #[test]
    fn test_header_overflow() {
        let sprite = SpriteImage::new(vec![0; 70_000], 70_000, 1).unwrap();
        assert!(matches!(
            encode_sprite(&sprite),
            Err(LoadError::HeaderOverflow { width: 70_000, .. })
        ));
    }

    #[test]
    fn test_empty_photo() {
        let photo = parse_photo(&[0, 0, 5, 0], &LoaderLimits::default()).unwrap();
        assert_eq!((photo.width, photo.height), (0, 5));
        assert!(photo.pixels.is_empty());
    }
}
