use photo_quant::{quantize, PHOTO_BASE};
use serde::Serialize;

use crate::error::LoadError;
use crate::loader::RawPhoto;

/// Quantization summary for one photo, as printed by `roomview info`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PhotoInfo {
    pub width: usize,
    pub height: usize,
    pub pixels: u64,
    pub fine_buckets_used: usize,
    pub coarse_buckets_used: usize,
    pub promoted_pixels: u64,
    pub promoted: Vec<PromotedBucket>,
}

/// One promoted fine bucket and the slot it was given
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromotedBucket {
    pub slot: u8,
    pub key: u16,
    pub count: u32,
    /// 6-bit register values `[r, g, b]`
    pub color: [u8; 3],
}

impl PhotoInfo {
    /// Quantize `raw` and collect its statistics
    pub fn analyze(raw: &RawPhoto) -> Result<Self, LoadError> {
        let quantized = quantize(&raw.pixels, raw.width, raw.height)?;
        let stats = quantized.stats();

        let promoted = quantized
            .promoted()
            .iter()
            .zip(quantized.promoted_counts())
            .enumerate()
            .map(|(rank, (&key, &count))| PromotedBucket {
                slot: PHOTO_BASE + rank as u8,
                key,
                count,
                color: quantized
                    .palette()
                    .promoted(rank)
                    .unwrap_or_default()
                    .to_bytes(),
            })
            .filter(|bucket| bucket.count > 0)
            .collect();

        Ok(Self {
            width: raw.width,
            height: raw.height,
            pixels: stats.pixels,
            fine_buckets_used: stats.fine_buckets_used,
            coarse_buckets_used: stats.coarse_buckets_used,
            promoted_pixels: stats.promoted_pixels,
            promoted,
        })
    }

    /// Share of pixels that got an individually averaged color
    pub fn promoted_ratio(&self) -> f64 {
        if self.pixels == 0 {
            0.0
        } else {
            self.promoted_pixels as f64 / self.pixels as f64
        }
    }
}
