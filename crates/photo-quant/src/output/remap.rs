//! Second pass: replace every pixel with its resolved palette slot.

use crate::color::Rgb565;
use crate::palette::RemapTable;

/// Map a raw pixel stream through the allocator's remap table.
///
/// The output has one index per input pixel, in the same order.
pub fn remap_pixels(pixels: &[Rgb565], table: &RemapTable) -> Vec<u8> {
    pixels.iter().map(|&pixel| table.slot_for(pixel)).collect()
}
