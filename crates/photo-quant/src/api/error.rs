//! Unified error type for the photo-quant public API.
//!
//! Quantization itself is total over well-formed input. [`QuantizeError`]
//! only reports misuse at the API boundary: buffers that disagree with
//! their declared dimensions, unsupported histogram key depths, and
//! compositing without an active room.

use std::fmt;

/// Error type for the photo-quant public API.
///
/// # Example
///
/// ```
/// use photo_quant::{quantize, QuantizeError, Rgb565};
///
/// let pixels = vec![Rgb565::new(0); 3];
/// let err = quantize(&pixels, 2, 2).unwrap_err();
/// assert!(matches!(err, QuantizeError::DimensionMismatch { len: 3, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Pixel stream length does not equal `width * height`
    DimensionMismatch {
        /// Number of samples supplied
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// Sprite pixel buffer length does not equal `width * height`
    SpriteDimensionMismatch {
        /// Number of bytes supplied
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// Histogram key depth outside `1..=5` bits per channel
    UnsupportedKeyDepth {
        /// Requested bits per channel
        bits: u8,
    },
    /// A scanline was requested before any room was made active
    NoActiveRoom,
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::DimensionMismatch { len, width, height } => write!(
                f,
                "pixel stream length {} does not match dimensions {}x{}",
                len, width, height
            ),
            QuantizeError::SpriteDimensionMismatch { len, width, height } => write!(
                f,
                "sprite buffer length {} does not match dimensions {}x{}",
                len, width, height
            ),
            QuantizeError::UnsupportedKeyDepth { bits } => write!(
                f,
                "unsupported histogram key depth: {} bits per channel (expected 1..=5)",
                bits
            ),
            QuantizeError::NoActiveRoom => write!(f, "no active room set on render context"),
        }
    }
}

impl std::error::Error for QuantizeError {}
