//! Quantized output.
//!
//! This module provides [`IndexedPhoto`], the stored result of quantization,
//! and the remap pass that produces its indices.

mod indexed_photo;
mod remap;

pub use indexed_photo::IndexedPhoto;
pub use remap::remap_pixels;
