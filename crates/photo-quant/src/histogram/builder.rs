//! First pass: fill the fine and coarse tables from a raw pixel stream.

use super::bucket::ColorHistogram;
use super::key::KeyDepth;
use crate::api::QuantizeError;
use crate::color::Rgb565;

/// The paired fine and coarse histograms of one photo.
///
/// Besides the two tables, the builder records for each fine bucket the
/// coarse key its pixels fell into. Since the coarse key is built from a
/// subset of the bits of the fine key, that parent is the same for every
/// pixel in a fine bucket.
#[derive(Debug, Clone)]
pub struct PhotoHistogram {
    fine: ColorHistogram,
    coarse: ColorHistogram,
    parents: Vec<Option<u16>>,
}

impl PhotoHistogram {
    /// Build both tables in a single pass over `pixels`.
    ///
    /// `pixels` is borrowed so the same stream can be replayed by the remap
    /// pass.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::DimensionMismatch`] when `pixels.len()` is not
    /// `width * height`.
    pub fn build(pixels: &[Rgb565], width: usize, height: usize) -> Result<Self, QuantizeError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(QuantizeError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }

        let mut fine = ColorHistogram::new(KeyDepth::FINE);
        let mut coarse = ColorHistogram::new(KeyDepth::COARSE);
        let mut parents = vec![None; fine.len()];

        for &pixel in pixels {
            let fine_key = fine.add(pixel);
            let coarse_key = coarse.add(pixel);
            parents[fine_key as usize] = Some(coarse_key);
        }

        Ok(Self {
            fine,
            coarse,
            parents,
        })
    }

    /// The 4096-bucket fine table.
    #[inline]
    pub fn fine(&self) -> &ColorHistogram {
        &self.fine
    }

    /// The 64-bucket coarse table.
    #[inline]
    pub fn coarse(&self) -> &ColorHistogram {
        &self.coarse
    }

    /// Coarse key recorded for a fine bucket during the build pass, `None`
    /// if the fine bucket never received a pixel.
    #[inline]
    pub fn recorded_parent(&self, fine_key: u16) -> Option<u16> {
        self.parents[fine_key as usize]
    }

    /// Coarse parent of any fine bucket. Falls back to deriving it from the
    /// key for buckets that never received a pixel.
    #[inline]
    pub fn parent(&self, fine_key: u16) -> u16 {
        self.recorded_parent(fine_key)
            .unwrap_or_else(|| KeyDepth::FINE.parent_key(fine_key, KeyDepth::COARSE))
    }
}
