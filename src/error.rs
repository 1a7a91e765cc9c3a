use std::path::PathBuf;

use photo_quant::QuantizeError;
use thiserror::Error;

/// Failures reading photo and sprite files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated file: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Image too large: {width}x{height} (max {max_width}x{max_height})")]
    TooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    #[error("Image too wide for file header: {width}x{height}")]
    HeaderOverflow { width: usize, height: usize },

    #[error("Quantization error: {0}")]
    Quantize(#[from] QuantizeError),
}

/// Failures loading or querying the room configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("No room given and no default_room configured")]
    NoDefaultRoom,

    #[error("Invalid view size: {width}x{height}")]
    InvalidView { width: u32, height: u32 },
}

/// Failures producing output images.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Pixel buffer of {len} bytes does not match {width}x{height}")]
    BufferSize {
        len: usize,
        width: u32,
        height: u32,
    },

    #[error("Compositing error: {0}")]
    Composite(#[from] QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures activating a room: either its config or one of its files.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Room {room}: {path}: {source}")]
    Load {
        room: String,
        path: PathBuf,
        source: LoadError,
    },
}
