//! Bucket keys derived from the high-order bits of each channel.

use crate::api::QuantizeError;
use crate::color::Rgb565;

/// Number of high-order bits per channel used to form a bucket key.
///
/// A depth of `n` yields keys laid out as `R…G…B…` with `n` bits each, so the
/// key space has `2^(3n)` buckets. Depth 4 is the fine table (4096 buckets),
/// depth 2 the coarse table (64 buckets). Red and blue only carry 5 bits, so
/// depths above 5 are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyDepth(u8);

impl KeyDepth {
    /// Fine table depth: `RRRRGGGGBBBB`.
    pub const FINE: Self = Self(4);
    /// Coarse table depth: `RRGGBB`.
    pub const COARSE: Self = Self(2);
    /// Deepest supported key (limited by the 5-bit red and blue channels).
    pub const MAX_BITS: u8 = 5;

    /// Validate a key depth.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::UnsupportedKeyDepth`] when `bits` is `0` or above
    /// [`KeyDepth::MAX_BITS`].
    pub fn new(bits: u8) -> Result<Self, QuantizeError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(QuantizeError::UnsupportedKeyDepth { bits });
        }
        Ok(Self(bits))
    }

    /// Bits per channel.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Number of distinct keys at this depth.
    #[inline]
    pub fn bucket_count(self) -> usize {
        1 << (3 * self.0 as usize)
    }

    /// Key of a pixel at this depth.
    ///
    /// ```
    /// use photo_quant::{KeyDepth, Rgb565};
    ///
    /// let pixel = Rgb565::new(0xFFFF);
    /// assert_eq!(KeyDepth::FINE.key(pixel), 0xFFF);
    /// assert_eq!(KeyDepth::COARSE.key(pixel), 0x3F);
    /// ```
    #[inline]
    pub fn key(self, pixel: Rgb565) -> u16 {
        let n = self.0;
        let r = (pixel.red() >> (5 - n)) as u16;
        let g = (pixel.green() >> (6 - n)) as u16;
        let b = (pixel.blue() >> (5 - n)) as u16;
        (r << (2 * n)) | (g << n) | b
    }

    /// Map a key at this depth to the key of the enclosing bucket at a
    /// shallower depth.
    ///
    /// Keys are built from the top bits of each channel, so dropping the low
    /// bits of every channel field gives the same result as keying the
    /// original pixel at the shallower depth.
    #[inline]
    pub fn parent_key(self, key: u16, coarser: KeyDepth) -> u16 {
        debug_assert!(coarser.0 <= self.0, "parent depth must not exceed child depth");
        let n = self.0;
        let m = coarser.0;
        let mask = (1u16 << n) - 1;
        let shift = n - m;
        let r = (key >> (2 * n)) & mask;
        let g = (key >> n) & mask;
        let b = key & mask;
        ((r >> shift) << (2 * m)) | ((g >> shift) << m) | (b >> shift)
    }
}
