//! Roomview - scrolling room viewer
//!
//! Loads room photos and sprite files, quantizes photos with `photo-quant`,
//! and renders view windows to indexed PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod loader;
pub mod models;
pub mod rendering;
pub mod services;
