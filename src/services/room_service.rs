use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use photo_quant::{Palette, PlacedObject, QuantizeStats, RenderContext, Room, SpriteImage};

use crate::error::{ConfigError, RoomError};
use crate::loader::{self, LoaderLimits};
use crate::models::AppConfig;

/// A room ready for display: the composited scene plus the palette to show
/// it with.
#[derive(Debug, Clone)]
pub struct LoadedRoom {
    pub name: String,
    pub room: Room,
    pub palette: Palette,
    pub stats: QuantizeStats,
}

/// Loads rooms named in the configuration from disk.
///
/// Sprite files are cached by path, so objects that share an image across
/// rooms share one bitmap.
pub struct RoomService {
    config: AppConfig,
    base_palette: Palette,
    sprites: HashMap<PathBuf, Arc<SpriteImage>>,
}

impl RoomService {
    /// A service whose sprite palette block is the 2:2:2 color cube.
    pub fn new(config: AppConfig) -> Self {
        Self::with_palette(config, Palette::with_rgb222_sprites())
    }

    /// A service with a caller-supplied sprite palette block.
    pub fn with_palette(config: AppConfig, base_palette: Palette) -> Self {
        Self {
            config,
            base_palette,
            sprites: HashMap::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn limits(&self) -> LoaderLimits {
        self.config.limits
    }

    fn sprite(&mut self, room: &str, path: &Path) -> Result<Arc<SpriteImage>, RoomError> {
        if let Some(sprite) = self.sprites.get(path) {
            return Ok(sprite.clone());
        }
        let sprite = loader::read_sprite(path, &self.limits()).map_err(|source| RoomError::Load {
            room: room.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        self.sprites.insert(path.to_path_buf(), sprite.clone());
        Ok(sprite)
    }

    /// Load, quantize and assemble a room. `None` loads the default room.
    pub fn load_room(&mut self, name: Option<&str>) -> Result<LoadedRoom, RoomError> {
        let (name, room_config) = self.config.room(name)?;
        let name = name.to_string();
        let room_config = room_config.clone();

        let photo_path = self.config.resolve(&room_config.photo);
        let quantized =
            loader::load_photo(&photo_path, &self.limits()).map_err(|source| RoomError::Load {
                room: name.clone(),
                path: photo_path.clone(),
                source,
            })?;
        let stats = quantized.stats();

        let mut palette = self.base_palette.clone();
        palette.load_photo(quantized.palette());
        let (photo, _) = quantized.into_parts();

        let mut objects = Vec::with_capacity(room_config.objects.len());
        for object in &room_config.objects {
            let path = self.config.resolve(&object.image);
            let sprite = self.sprite(&name, &path)?;
            objects.push(PlacedObject::new(object.x, object.y, sprite));
        }

        tracing::info!(
            room = %name,
            width = photo.width(),
            height = photo.height(),
            objects = objects.len(),
            "Loaded room"
        );

        Ok(LoadedRoom {
            name,
            room: Room::with_objects(photo, objects),
            palette,
            stats,
        })
    }

    /// Load a room and make it the context's active room.
    ///
    /// On failure the context keeps its previous room. Returns the new
    /// room's palette, which the caller pushes to the display.
    pub fn activate(
        &mut self,
        name: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<Palette, RoomError> {
        let loaded = self.load_room(name)?;
        if ctx.set_active_room(loaded.room).is_some() {
            tracing::debug!(room = %loaded.name, "Replaced active room");
        }
        Ok(loaded.palette)
    }

    /// Names of all configured rooms, sorted.
    pub fn room_names(&self) -> Vec<&str> {
        self.config.rooms.keys().map(String::as_str).collect()
    }

    /// Check that a room exists without loading it.
    pub fn has_room(&self, name: &str) -> Result<(), ConfigError> {
        self.config.room(Some(name)).map(|_| ())
    }
}
