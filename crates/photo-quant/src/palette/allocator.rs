//! Ranked allocation of the 128 photo palette slots.
//!
//! The most popular fine buckets each get a dedicated slot. Every coarse
//! bucket gets a slot too, so any fine bucket that misses the cut still has a
//! color: the one of the coarse bucket it sits in.

use super::palette::{PhotoPalette, COARSE_BASE, PHOTO_BASE, PHOTO_SLOTS, PROMOTED_SLOTS};
use crate::color::{DacColor, Rgb565};
use crate::histogram::{KeyDepth, PhotoHistogram};

/// Fine-key to palette-slot lookup produced by the allocator.
///
/// Every one of the 4096 fine keys resolves to a slot in
/// `[PHOTO_BASE, PHOTO_BASE + 128)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapTable {
    slots: Vec<u8>,
}

impl RemapTable {
    /// Slot for a fine key.
    ///
    /// # Panics
    ///
    /// Panics if `fine_key` is not a 12-bit key.
    #[inline]
    pub fn slot_for_key(&self, fine_key: u16) -> u8 {
        self.slots[fine_key as usize]
    }

    /// Slot for a pixel, keyed with the same function the histogram used.
    #[inline]
    pub fn slot_for(&self, pixel: Rgb565) -> u8 {
        self.slots[KeyDepth::FINE.key(pixel) as usize]
    }

    /// All 4096 resolved slots, indexed by fine key.
    #[inline]
    pub fn slots(&self) -> &[u8] {
        &self.slots
    }
}

/// Output of [`allocate`]: slot colors, the remap table, and the promoted
/// fine keys in rank order.
#[derive(Debug, Clone)]
pub struct PaletteAllocation {
    pub palette: PhotoPalette,
    pub remap: RemapTable,
    pub promoted: Vec<u16>,
}

/// Rank fine buckets by descending count, ties by ascending key.
///
/// The tie-break makes the ranking a total order, so identical input always
/// yields an identical palette.
pub fn rank_fine_buckets(histogram: &PhotoHistogram) -> Vec<u16> {
    let fine = histogram.fine();
    let mut order: Vec<u16> = (0..fine.len() as u16).collect();
    order.sort_unstable_by(|&a, &b| {
        fine.bucket(b)
            .count()
            .cmp(&fine.bucket(a).count())
            .then(a.cmp(&b))
    });
    order
}

/// Assign all 128 photo slots and resolve every fine key to one of them.
pub fn allocate(histogram: &PhotoHistogram) -> PaletteAllocation {
    let fine = histogram.fine();
    let coarse = histogram.coarse();

    let mut colors = [DacColor::BLACK; PHOTO_SLOTS];
    // None until the fine bucket is promoted or falls back to its parent.
    let mut assigned: Vec<Option<u8>> = vec![None; fine.len()];

    let ranked = rank_fine_buckets(histogram);
    let promoted: Vec<u16> = ranked.into_iter().take(PROMOTED_SLOTS).collect();
    for (rank, &key) in promoted.iter().enumerate() {
        colors[rank] = fine.bucket(key).dac_color();
        assigned[key as usize] = Some(PHOTO_BASE + rank as u8);
    }

    // Every coarse bucket gets a slot, even if all its pixels were promoted.
    for (key, bucket) in coarse.buckets().iter().enumerate() {
        colors[PROMOTED_SLOTS + key] = bucket.dac_color();
    }

    let slots = assigned
        .iter()
        .enumerate()
        .map(|(key, slot)| {
            slot.unwrap_or_else(|| COARSE_BASE + histogram.parent(key as u16) as u8)
        })
        .collect();

    PaletteAllocation {
        palette: PhotoPalette::new(colors),
        remap: RemapTable { slots },
        promoted,
    }
}
