//! Scanline compositing
//!
//! The compositor turns a [`Room`] (quantized photo plus placed sprites)
//! into lines of palette indices on demand. [`RenderContext`] owns the room
//! being displayed; the free functions in [`scanline`] compose from any room
//! directly.

mod context;
mod room;
pub mod scanline;
mod sprite;

pub use context::RenderContext;
pub use room::Room;
pub use scanline::{compose_horizontal, compose_line, compose_vertical, compose_view, Orientation};
pub use sprite::{PlacedObject, SpriteImage, TRANSPARENT};
