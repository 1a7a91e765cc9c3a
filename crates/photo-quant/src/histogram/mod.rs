//! Two-resolution color histograms
//!
//! The first quantization pass files every pixel into a fine table keyed by
//! the top 4 bits of each channel and a coarse table keyed by the top 2 bits.
//! Both tables share one shape, [`ColorHistogram`], parameterized by
//! [`KeyDepth`].

mod bucket;
mod builder;
mod key;

pub use bucket::{ColorHistogram, HistogramBucket};
pub use builder::PhotoHistogram;
pub use key::KeyDepth;
