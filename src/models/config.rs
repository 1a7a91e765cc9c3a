use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::view_spec::ViewSpec;
use crate::error::ConfigError;
use crate::loader::LoaderLimits;

/// Application configuration loaded from a rooms YAML file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Scroll window size
    #[serde(default)]
    pub view: ViewSpec,

    /// Maximum photo and sprite dimensions
    #[serde(default)]
    pub limits: LoaderLimits,

    /// Room used when none is named
    #[serde(default)]
    pub default_room: Option<String>,

    /// Room definitions
    #[serde(default)]
    pub rooms: BTreeMap<String, RoomConfig>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// One room: a photo plus the objects placed over it
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RoomConfig {
    /// Photo file
    pub photo: PathBuf,

    /// Objects in paint order; later entries draw over earlier ones
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

/// A sprite file anchored at a room position
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ObjectConfig {
    /// Sprite file
    pub image: PathBuf,

    /// Left edge in room coordinates
    #[serde(default)]
    pub x: i32,

    /// Top edge in room coordinates
    #[serde(default)]
    pub y: i32,
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.view = config.view.validate()?;
        config.base_dir = base_dir.to_path_buf();
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::from_yaml(&content, base_dir)?;
        tracing::info!(
            path = %path.display(),
            rooms = config.rooms.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a room by name, or the default room when `name` is `None`
    pub fn room(&self, name: Option<&str>) -> Result<(&str, &RoomConfig), ConfigError> {
        let name = match name {
            Some(name) => name,
            None => self
                .default_room
                .as_deref()
                .ok_or(ConfigError::NoDefaultRoom)?,
        };
        self.rooms
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::UnknownRoom(name.to_string()))
    }

    /// Resolve a configured path against the config directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
