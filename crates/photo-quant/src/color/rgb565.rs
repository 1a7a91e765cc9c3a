//! 16-bit 5:6:5 pixel samples
//!
//! Photos arrive as packed `RRRRRGGGGGGBBBBB` words. The channel accessors
//! return the raw native-range values (5, 6 and 5 bits) that the histogram
//! accumulates.

/// A packed high-color pixel: 5 bits red, 6 bits green, 5 bits blue.
///
/// # Example
///
/// ```
/// use photo_quant::Rgb565;
///
/// let pixel = Rgb565::from_channels(31, 0, 1);
/// assert_eq!(pixel.raw(), 0xF801);
/// assert_eq!(pixel.red(), 31);
/// assert_eq!(pixel.blue(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(u16);

impl Rgb565 {
    /// Maximum value of the red and blue channels.
    pub const MAX_RB: u8 = 0x1F;
    /// Maximum value of the green channel.
    pub const MAX_G: u8 = 0x3F;

    /// Wrap a raw packed sample.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack native-range channels. Out-of-range bits are masked off.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        let r = (red & Self::MAX_RB) as u16;
        let g = (green & Self::MAX_G) as u16;
        let b = (blue & Self::MAX_RB) as u16;
        Self((r << 11) | (g << 5) | b)
    }

    /// The packed 16-bit value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, `0..=31`.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    /// Green channel, `0..=63`.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel, `0..=31`.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(pixel: Rgb565) -> Self {
        pixel.0
    }
}
