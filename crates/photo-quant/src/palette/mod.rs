//! Palette layout and slot allocation
//!
//! This module provides the 192-entry [`Palette`], the photo's 128-entry
//! [`PhotoPalette`], and the allocator that ranks histogram buckets into
//! those slots.

mod allocator;
mod palette;

pub use allocator::{allocate, rank_fine_buckets, PaletteAllocation, RemapTable};
pub use palette::{
    Palette, PhotoPalette, COARSE_BASE, COARSE_SLOTS, PALETTE_SIZE, PHOTO_BASE, PHOTO_SLOTS,
    PROMOTED_SLOTS, SPRITE_SLOTS,
};
