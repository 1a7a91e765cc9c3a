//! Sprite images and their placement in a room.

use std::sync::Arc;

use crate::api::QuantizeError;

/// Sprite pixel value meaning "do not draw".
///
/// Sprite art uses palette indices `0..64`; `0x40` sits just past that block.
pub const TRANSPARENT: u8 = 0x40;

/// A sprite bitmap of palette indices, row-major, top row first.
///
/// Values are indices into the sprite block of the palette, or
/// [`TRANSPARENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl SpriteImage {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::SpriteDimensionMismatch`] when `pixels.len()` is not
    /// `width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(QuantizeError::SpriteDimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major palette indices, top row first; [`TRANSPARENT`] marks holes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at `(x, y)` relative to the sprite's top-left corner.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the sprite.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }
}

/// A sprite anchored at a position in room coordinates.
///
/// The image is shared, so several objects can reuse one bitmap.
#[derive(Debug, Clone)]
pub struct PlacedObject {
    x: i32,
    y: i32,
    image: Arc<SpriteImage>,
}

impl PlacedObject {
    pub fn new(x: i32, y: i32, image: Arc<SpriteImage>) -> Self {
        Self { x, y, image }
    }

    /// Left edge in room coordinates.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Top edge in room coordinates.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn image(&self) -> &SpriteImage {
        &self.image
    }

    /// Move the object's top-left anchor.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
