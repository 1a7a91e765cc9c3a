//! quantize(): the two-pass photo quantizer.
//!
//! Pass one builds the fine and coarse histograms, the allocator ranks them
//! into the 128 photo slots, and pass two remaps the same pixel stream
//! through the resulting table.

use super::error::QuantizeError;
use crate::color::Rgb565;
use crate::histogram::PhotoHistogram;
use crate::output::{remap_pixels, IndexedPhoto};
use crate::palette::{allocate, PhotoPalette};

/// Summary numbers for one quantization, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantizeStats {
    /// Pixels in the photo.
    pub pixels: u64,
    /// Fine buckets with at least one pixel.
    pub fine_buckets_used: usize,
    /// Coarse buckets with at least one pixel.
    pub coarse_buckets_used: usize,
    /// Pixels that landed in a promoted fine bucket and so got their own
    /// averaged color rather than their coarse parent's.
    pub promoted_pixels: u64,
}

/// Result of [`quantize`]: the indexed photo and the colors behind it.
#[derive(Debug, Clone)]
pub struct QuantizedPhoto {
    photo: IndexedPhoto,
    palette: PhotoPalette,
    promoted: Vec<u16>,
    promoted_counts: Vec<u32>,
    stats: QuantizeStats,
}

impl QuantizedPhoto {
    /// The indexed photo, indices in `[PHOTO_BASE, PHOTO_BASE + 128)`.
    #[inline]
    pub fn photo(&self) -> &IndexedPhoto {
        &self.photo
    }

    /// The 128 photo-block colors.
    #[inline]
    pub fn palette(&self) -> &PhotoPalette {
        &self.palette
    }

    /// Promoted fine keys in rank order; rank `i` owns slot `PHOTO_BASE + i`.
    #[inline]
    pub fn promoted(&self) -> &[u16] {
        &self.promoted
    }

    /// Pixel count of each promoted fine bucket, parallel to [`promoted`].
    ///
    /// [`promoted`]: Self::promoted
    #[inline]
    pub fn promoted_counts(&self) -> &[u32] {
        &self.promoted_counts
    }

    /// Summary numbers for logging.
    #[inline]
    pub fn stats(&self) -> QuantizeStats {
        self.stats
    }

    /// Split into the indexed photo and its palette block.
    pub fn into_parts(self) -> (IndexedPhoto, PhotoPalette) {
        (self.photo, self.palette)
    }
}

/// Quantize a 5:6:5 photo to 128 palette slots.
///
/// `pixels` is row-major, top row first, and must hold exactly
/// `width * height` samples. The result is deterministic: equal input gives
/// byte-identical indices and palette.
///
/// # Errors
///
/// [`QuantizeError::DimensionMismatch`] when the stream length disagrees
/// with the dimensions. Any well-formed stream, including an empty one,
/// quantizes successfully.
///
/// # Example
///
/// ```
/// use photo_quant::{quantize, Rgb565, PHOTO_BASE};
///
/// let v = Rgb565::from_channels(31, 40, 8);
/// let result = quantize(&[v; 4], 2, 2).unwrap();
///
/// assert_eq!(result.photo().indices(), &[PHOTO_BASE; 4]);
/// assert_eq!(result.palette().promoted(0).unwrap().to_bytes(), [62, 40, 16]);
/// ```
pub fn quantize(
    pixels: &[Rgb565],
    width: usize,
    height: usize,
) -> Result<QuantizedPhoto, QuantizeError> {
    let histogram = PhotoHistogram::build(pixels, width, height)?;
    let allocation = allocate(&histogram);
    let indices = remap_pixels(pixels, &allocation.remap);
    let photo = IndexedPhoto::new(indices, width, height)?;

    let fine = histogram.fine();
    let promoted_counts: Vec<u32> = allocation
        .promoted
        .iter()
        .map(|&key| fine.bucket(key).count())
        .collect();
    let stats = QuantizeStats {
        pixels: pixels.len() as u64,
        fine_buckets_used: fine.populated(),
        coarse_buckets_used: histogram.coarse().populated(),
        promoted_pixels: promoted_counts.iter().map(|&n| n as u64).sum(),
    };

    Ok(QuantizedPhoto {
        photo,
        palette: allocation.palette,
        promoted: allocation.promoted,
        promoted_counts,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PHOTO_BASE;

    #[test]
    fn test_stats_for_two_colors() {
        let a = Rgb565::new(0x0000);
        let b = Rgb565::new(0xFFFF);
        let result = quantize(&[a, b, b], 3, 1).unwrap();

        let stats = result.stats();
        assert_eq!(stats.pixels, 3);
        assert_eq!(stats.fine_buckets_used, 2);
        assert_eq!(stats.coarse_buckets_used, 2);
        assert_eq!(stats.promoted_pixels, 3);
        assert_eq!(result.promoted()[0], 0xFFF);
        assert_eq!(result.promoted()[1], 0x000);
        assert_eq!(&result.promoted_counts()[..3], &[2, 1, 0]);
        assert_eq!(result.promoted_counts().len(), result.promoted().len());
    }

    #[test]
    fn test_empty_photo_quantizes() {
        let result = quantize(&[], 0, 0).unwrap();
        assert!(result.photo().indices().is_empty());
        assert!(result.palette().colors().iter().all(|c| c.to_bytes() == [0, 0, 0]));
        assert_eq!(result.stats().promoted_pixels, 0);
    }

    #[test]
    fn test_into_parts() {
        let result = quantize(&[Rgb565::new(0x1234); 2], 1, 2).unwrap();
        let (photo, palette) = result.into_parts();
        assert_eq!(photo.height(), 2);
        assert!(palette.slot(PHOTO_BASE).is_some());
    }

    #[test]
    fn test_rejects_mismatched_stream() {
        assert!(matches!(
            quantize(&[Rgb565::new(0); 5], 2, 3),
            Err(QuantizeError::DimensionMismatch { len: 5, .. })
        ));
    }
}
