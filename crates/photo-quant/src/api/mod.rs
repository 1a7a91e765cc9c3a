//! Public API for the photo-quant crate.
//!
//! This module provides the [`quantize`] entry point, its
//! [`QuantizedPhoto`] result, and the [`QuantizeError`] error type.

mod error;
mod quantize;

pub use error::QuantizeError;
pub use quantize::{quantize, QuantizeStats, QuantizedPhoto};
