#![allow(clippy::module_inception)]

//! photo-quant: adaptive palette quantization and scanline compositing for
//! indexed-color displays.
//!
//! The crate reduces a 16-bit 5:6:5 photo to 128 palette slots of a fixed
//! 192-entry palette, and composes lines of the quantized photo with sprite
//! objects drawn over it.
//!
//! # Quick Start
//!
//! ```
//! use photo_quant::{quantize, Palette, RenderContext, Rgb565, Room};
//!
//! let pixels = vec![Rgb565::from_channels(10, 20, 30); 16];
//! let quantized = quantize(&pixels, 4, 4).unwrap();
//!
//! let mut palette = Palette::with_rgb222_sprites();
//! palette.load_photo(quantized.palette());
//!
//! let (photo, _) = quantized.into_parts();
//! let mut ctx = RenderContext::new();
//! ctx.set_active_room(Room::new(photo));
//!
//! let mut line = [0u8; 6];
//! ctx.fill_horizontal(-1, 0, &mut line).unwrap();
//! assert_eq!(line, [0, 64, 64, 64, 64, 0]);
//! ```
//!
//! # Palette Layout
//!
//! | Slots        | Owner                                        |
//! |--------------|----------------------------------------------|
//! | `0..64`      | sprite art, set once by the application      |
//! | `64..128`    | the 64 most popular fine buckets, by rank    |
//! | `128..192`   | one slot per coarse bucket                   |
//!
//! # Quantization
//!
//! Each pixel is filed into a 4096-bucket fine histogram (top 4 bits per
//! channel) and a 64-bucket coarse histogram (top 2 bits per channel), with
//! per-bucket channel sums. Fine buckets are ranked by count, ties broken by
//! ascending key. The top 64 get their own averaged color; every other fine
//! bucket resolves to the slot of the coarse bucket containing it.
//!
//! Palette colors are 6-bit register values: red and blue are shifted left
//! one bit, green is used as is. See [`DacColor`].
//!
//! # Compositing
//!
//! A line is composed by sampling the photo (out-of-bounds samples are `0`)
//! and drawing each placed object over it in list order. Sprite pixels equal
//! to [`TRANSPARENT`] are skipped. See [`compositor::scanline`].

pub mod api;
pub mod color;
pub mod compositor;
pub mod histogram;
pub mod output;
pub mod palette;


pub use api::{quantize, QuantizeError, QuantizeStats, QuantizedPhoto};
pub use color::{DacColor, Rgb565};
pub use compositor::{Orientation, PlacedObject, RenderContext, Room, SpriteImage, TRANSPARENT};
pub use histogram::{KeyDepth, PhotoHistogram};
pub use output::IndexedPhoto;
pub use palette::{Palette, PhotoPalette, PALETTE_SIZE, PHOTO_BASE, SPRITE_SLOTS};
