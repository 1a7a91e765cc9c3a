//! IndexedPhoto: a quantized room photo.
//!
//! [`IndexedPhoto`] stores one palette index per pixel in row-major order,
//! top row first. Once built it is never modified; the compositor samples it
//! read-only.

use crate::api::QuantizeError;

/// A photo reduced to palette indices.
///
/// Indices produced by quantization lie in `[PHOTO_BASE, PHOTO_BASE + 128)`.
///
/// # Example
///
/// ```
/// use photo_quant::IndexedPhoto;
///
/// let photo = IndexedPhoto::new(vec![64, 65, 66, 67], 2, 2).unwrap();
///
/// assert_eq!(photo.pixel(1, 0), Some(65));
/// assert_eq!(photo.pixel(2, 0), None);
/// assert_eq!(photo.row(1), &[66, 67]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPhoto {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexedPhoto {
    /// Wrap a row-major index buffer.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::DimensionMismatch`] when `indices.len()` is not
    /// `width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        if width.checked_mul(height) != Some(indices.len()) {
            return Err(QuantizeError::DimensionMismatch {
                len: indices.len(),
                width,
                height,
            });
        }
        Ok(Self {
            indices,
            width,
            height,
        })
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
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

    /// Index at `(x, y)`, or `None` outside the photo.
    ///
    /// Takes signed coordinates so scroll origins left of or above the photo
    /// can be sampled directly.
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.indices[y as usize * self.width + x as usize])
    }

    /// One row of indices.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.indices[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_length() {
        let err = IndexedPhoto::new(vec![0; 5], 2, 2).unwrap_err();
        assert_eq!(
            err,
            QuantizeError::DimensionMismatch {
                len: 5,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn test_pixel_bounds() {
        let photo = IndexedPhoto::new((0..6).collect(), 3, 2).unwrap();
        assert_eq!(photo.pixel(0, 0), Some(0));
        assert_eq!(photo.pixel(2, 1), Some(5));
        assert_eq!(photo.pixel(-1, 0), None);
        assert_eq!(photo.pixel(0, -1), None);
        assert_eq!(photo.pixel(3, 0), None);
        assert_eq!(photo.pixel(0, 2), None);
    }

    #[test]
    fn test_empty_photo() {
        let photo = IndexedPhoto::new(Vec::new(), 0, 0).unwrap();
        assert_eq!(photo.pixel(0, 0), None);
        assert!(photo.indices().is_empty());
    }
}
