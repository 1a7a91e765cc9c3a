//! Color register values
//!
//! The target display's palette registers hold 6 bits per channel. A
//! [`DacColor`] stores those register values in 8-bit fields.

/// One palette entry as written to a 6-bit-per-channel color register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DacColor {
    /// Red register value (`0..=63`)
    pub r: u8,
    /// Green register value (`0..=63`)
    pub g: u8,
    /// Blue register value (`0..=63`)
    pub b: u8,
}

impl DacColor {
    /// All channels zero. Used for empty buckets.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Maximum register value.
    pub const MAX: u8 = 0x3F;

    /// Create a color from register values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert native 5:6:5 channel values to register values.
    ///
    /// Red and blue are shifted left one bit; green is already 6 bits wide.
    ///
    /// ```
    /// use photo_quant::DacColor;
    ///
    /// assert_eq!(DacColor::from_native(31, 63, 31), DacColor::new(62, 63, 62));
    /// ```
    #[inline]
    pub const fn from_native(red: u8, green: u8, blue: u8) -> Self {
        Self {
            r: (red & 0x1F) << 1,
            g: green & 0x3F,
            b: (blue & 0x1F) << 1,
        }
    }

    /// Expand a 2:2:2 sprite color code (`00RRGGBB`) to register values.
    ///
    /// Each 2-bit level maps to `0x00`, `0x15`, `0x2A` or `0x3F`.
    #[inline]
    pub const fn from_rgb222(code: u8) -> Self {
        const LEVELS: [u8; 4] = [0x00, 0x15, 0x2A, 0x3F];
        Self {
            r: LEVELS[((code >> 4) & 0x3) as usize],
            g: LEVELS[((code >> 2) & 0x3) as usize],
            b: LEVELS[(code & 0x3) as usize],
        }
    }

    /// Register values as `[r, g, b]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Expand the 6-bit register values to full 8-bit RGB.
    ///
    /// Uses bit replication so that `0x3F` becomes `0xFF` and `0` stays `0`.
    #[inline]
    pub const fn to_rgb8(self) -> [u8; 3] {
        [expand6(self.r), expand6(self.g), expand6(self.b)]
    }
}

#[inline]
const fn expand6(v: u8) -> u8 {
    let v = v & 0x3F;
    (v << 2) | (v >> 4)
}
