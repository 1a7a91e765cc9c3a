//! Histogram buckets and the generic color histogram table.

use super::key::KeyDepth;
use crate::color::{DacColor, Rgb565};

/// Pixel count and per-channel running sums for one bucket.
///
/// Sums are kept in the native channel ranges (5, 6 and 5 bits) so the
/// truncated average is itself a valid 5:6:5 channel triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramBucket {
    count: u32,
    red_sum: u64,
    green_sum: u64,
    blue_sum: u64,
}

impl HistogramBucket {
    #[inline]
    fn add(&mut self, pixel: Rgb565) {
        self.count += 1;
        self.red_sum += pixel.red() as u64;
        self.green_sum += pixel.green() as u64;
        self.blue_sum += pixel.blue() as u64;
    }

    /// Number of pixels that fell into this bucket.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// True when no pixel fell into this bucket.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Running `(red, green, blue)` sums.
    #[inline]
    pub fn sums(&self) -> (u64, u64, u64) {
        (self.red_sum, self.green_sum, self.blue_sum)
    }

    /// Integer-truncated native channel average, or `None` for an empty
    /// bucket.
    pub fn average(&self) -> Option<Rgb565> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as u64;
        Some(Rgb565::from_channels(
            (self.red_sum / n) as u8,
            (self.green_sum / n) as u8,
            (self.blue_sum / n) as u8,
        ))
    }

    /// Palette register color for this bucket; black when empty.
    pub fn dac_color(&self) -> DacColor {
        match self.average() {
            Some(avg) => DacColor::from_native(avg.red(), avg.green(), avg.blue()),
            None => DacColor::BLACK,
        }
    }
}

/// A frequency table of pixels keyed at a fixed [`KeyDepth`].
///
/// The fine and coarse tables are two instances of this type. Every key in
/// the depth's key space has a bucket, populated or not.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    depth: KeyDepth,
    buckets: Vec<HistogramBucket>,
}

impl ColorHistogram {
    /// Create an empty histogram covering the full key space of `depth`.
    pub fn new(depth: KeyDepth) -> Self {
        Self {
            depth,
            buckets: vec![HistogramBucket::default(); depth.bucket_count()],
        }
    }

    /// Accumulate one pixel, returning the key it was filed under.
    #[inline]
    pub fn add(&mut self, pixel: Rgb565) -> u16 {
        let key = self.depth.key(pixel);
        self.buckets[key as usize].add(pixel);
        key
    }

    /// Key depth of this table.
    #[inline]
    pub fn depth(&self) -> KeyDepth {
        self.depth
    }

    /// Bucket for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` lies outside the key space.
    #[inline]
    pub fn bucket(&self, key: u16) -> &HistogramBucket {
        &self.buckets[key as usize]
    }

    /// All buckets, indexed by key.
    #[inline]
    pub fn buckets(&self) -> &[HistogramBucket] {
        &self.buckets
    }

    /// Number of buckets (the size of the key space).
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True only for a histogram with no key space.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count as u64).sum()
    }

    /// Number of buckets holding at least one pixel.
    pub fn populated(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }
}
