//! Color types
//!
//! - [`Rgb565`]: packed 16-bit input samples
//! - [`DacColor`]: 6-bit-per-channel palette register values

mod dac;
mod rgb565;

pub use dac::DacColor;
pub use rgb565::Rgb565;
