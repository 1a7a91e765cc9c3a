//! The 192-entry display palette and the 128 photo-managed entries.
//!
//! Slot layout:
//!
//! ```text
//!   0 ..  64   sprite colors (owned by the caller, never written here)
//!  64 .. 128   promoted fine buckets, by rank
//! 128 .. 192   coarse buckets, by coarse key
//! ```

use crate::color::DacColor;

/// Slots reserved for sprite art at the bottom of the palette.
pub const SPRITE_SLOTS: usize = 64;
/// Slots given to the most popular fine buckets.
pub const PROMOTED_SLOTS: usize = 64;
/// Slots given to the coarse buckets, one per coarse key.
pub const COARSE_SLOTS: usize = 64;
/// Slots owned by photo quantization.
pub const PHOTO_SLOTS: usize = PROMOTED_SLOTS + COARSE_SLOTS;
/// Total palette size.
pub const PALETTE_SIZE: usize = SPRITE_SLOTS + PHOTO_SLOTS;

/// First palette index owned by the photo (`R`).
pub const PHOTO_BASE: u8 = SPRITE_SLOTS as u8;
/// First palette index holding a coarse bucket color.
pub const COARSE_BASE: u8 = PHOTO_BASE + PROMOTED_SLOTS as u8;

/// The colors a quantized photo contributes to the palette.
///
/// Entry `i` belongs to palette slot [`PHOTO_BASE`]` + i`. Every entry is
/// assigned by the allocator; entries with no pixels behind them are black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPalette {
    colors: [DacColor; PHOTO_SLOTS],
}

impl PhotoPalette {
    pub(crate) fn new(colors: [DacColor; PHOTO_SLOTS]) -> Self {
        Self { colors }
    }

    /// The 128 managed colors, in slot order starting at [`PHOTO_BASE`].
    #[inline]
    pub fn colors(&self) -> &[DacColor] {
        &self.colors
    }

    /// Color of an absolute palette slot, `None` outside the photo range.
    pub fn slot(&self, index: u8) -> Option<DacColor> {
        let offset = (index as usize).checked_sub(PHOTO_BASE as usize)?;
        self.colors.get(offset).copied()
    }

    /// Color assigned to the promoted fine bucket of the given rank.
    pub fn promoted(&self, rank: usize) -> Option<DacColor> {
        if rank < PROMOTED_SLOTS {
            Some(self.colors[rank])
        } else {
            None
        }
    }

    /// Color assigned to a coarse bucket.
    pub fn coarse(&self, coarse_key: u16) -> Option<DacColor> {
        let key = coarse_key as usize;
        if key < COARSE_SLOTS {
            Some(self.colors[PROMOTED_SLOTS + key])
        } else {
            None
        }
    }
}

/// The full 192-entry register table the display resolves indices through.
///
/// The sprite block is set once by the owner; [`Palette::load_photo`]
/// overwrites only the photo block on every room change.
///
/// # Example
///
/// ```
/// use photo_quant::{quantize, Palette, Rgb565, PHOTO_BASE};
///
/// let mut palette = Palette::with_rgb222_sprites();
/// let sprite_black = palette.get(0);
///
/// let quantized = quantize(&[Rgb565::new(0xFFFF)], 1, 1).unwrap();
/// palette.load_photo(quantized.palette());
///
/// assert_eq!(palette.get(0), sprite_black);
/// assert_eq!(palette.get(PHOTO_BASE).unwrap().to_bytes(), [62, 63, 62]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [DacColor; PALETTE_SIZE],
}

impl Palette {
    /// An all-black palette.
    pub fn new() -> Self {
        Self {
            entries: [DacColor::BLACK; PALETTE_SIZE],
        }
    }

    /// A palette whose sprite block holds the given colors.
    pub fn with_sprite_colors(sprite: &[DacColor; SPRITE_SLOTS]) -> Self {
        let mut palette = Self::new();
        palette.entries[..SPRITE_SLOTS].copy_from_slice(sprite);
        palette
    }

    /// A palette whose sprite block is the 2:2:2 RGB cube: slot `i` is the
    /// color code `00RRGGBB`.
    pub fn with_rgb222_sprites() -> Self {
        let mut sprite = [DacColor::BLACK; SPRITE_SLOTS];
        for (code, entry) in sprite.iter_mut().enumerate() {
            *entry = DacColor::from_rgb222(code as u8);
        }
        Self::with_sprite_colors(&sprite)
    }

    /// Overwrite the photo block with a quantized photo's colors.
    pub fn load_photo(&mut self, photo: &PhotoPalette) {
        self.entries[SPRITE_SLOTS..].copy_from_slice(photo.colors());
    }

    /// Entry at `index`, `None` past the end of the table.
    #[inline]
    pub fn get(&self, index: u8) -> Option<DacColor> {
        self.entries.get(index as usize).copied()
    }

    /// All 192 entries.
    #[inline]
    pub fn entries(&self) -> &[DacColor] {
        &self.entries
    }

    /// Number of entries (always [`PALETTE_SIZE`]).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat `[R, G, B, ...]` bytes with register values expanded to 8 bits.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|c| c.to_rgb8()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
