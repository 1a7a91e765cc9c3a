//! Test fixtures: synthetic photos, sprites and on-disk rooms.

use std::path::{Path, PathBuf};

use photo_quant::{Rgb565, SpriteImage, TRANSPARENT};
use roomview::loader;
use tempfile::TempDir;

/// Photo where red follows x, green follows y and blue is fixed.
pub fn gradient_photo(width: usize, height: usize) -> Vec<Rgb565> {
    (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgb565::from_channels(
                    (x * 31 / width.max(1)) as u8,
                    (y * 63 / height.max(1)) as u8,
                    12,
                )
            })
        })
        .collect()
}

/// Photo filled with one color.
pub fn flat_photo(width: usize, height: usize, color: Rgb565) -> Vec<Rgb565> {
    vec![color; width * height]
}

/// Sprite with an opaque border of `index` and a transparent middle.
pub fn frame_sprite(width: usize, height: usize, index: u8) -> SpriteImage {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    index
                } else {
                    TRANSPARENT
                }
            })
        })
        .collect();
    SpriteImage::new(pixels, width, height).unwrap()
}

/// A room directory on disk with a config file.
pub struct TestRoom {
    pub dir: TempDir,
    rooms: Vec<String>,
    default_room: Option<String>,
    view: Option<(u32, u32)>,
}

impl TestRoom {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            rooms: Vec::new(),
            default_room: None,
            view: None,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a photo file next to the config.
    pub fn photo(self, file: &str, width: usize, height: usize, pixels: &[Rgb565]) -> Self {
        loader::write_photo(&self.path(file), width, height, pixels).unwrap();
        self
    }

    /// Write a sprite file next to the config.
    pub fn sprite(self, file: &str, sprite: &SpriteImage) -> Self {
        loader::write_sprite(&self.path(file), sprite).unwrap();
        self
    }

    /// Add a room entry. `objects` is `(sprite file, x, y)` in paint order.
    pub fn room(mut self, name: &str, photo: &str, objects: &[(&str, i32, i32)]) -> Self {
        let mut entry = format!("  {name}:\n    photo: {photo}\n");
        if !objects.is_empty() {
            entry.push_str("    objects:\n");
            for (image, x, y) in objects {
                entry.push_str(&format!("      - {{ image: {image}, x: {x}, y: {y} }}\n"));
            }
        }
        self.rooms.push(entry);
        self
    }

    pub fn default_room(mut self, name: &str) -> Self {
        self.default_room = Some(name.to_string());
        self
    }

    pub fn view(mut self, width: u32, height: u32) -> Self {
        self.view = Some((width, height));
        self
    }

    /// Write `rooms.yaml` and return its path.
    pub fn write_config(&self) -> PathBuf {
        let mut yaml = String::new();
        if let Some((w, h)) = self.view {
            yaml.push_str(&format!("view: {{ width: {w}, height: {h} }}\n"));
        }
        if let Some(name) = &self.default_room {
            yaml.push_str(&format!("default_room: {name}\n"));
        }
        yaml.push_str("rooms:\n");
        for room in &self.rooms {
            yaml.push_str(room);
        }
        let path = self.path("rooms.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
