use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Size of the scrolling view window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSpec {
    pub width: u32,
    pub height: u32,
}

impl ViewSpec {
    /// The classic 320x182 scroll window (a 320x200 mode minus the status bar)
    pub const DEFAULT: Self = Self {
        width: 320,
        height: 182,
    };

    /// Largest accepted window in either direction
    pub const MAX_DIM: u32 = 4096;

    /// Validate the window size
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.width == 0
            || self.height == 0
            || self.width > Self::MAX_DIM
            || self.height > Self::MAX_DIM
        {
            return Err(ConfigError::InvalidView {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Pixels in one composed view
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for ViewSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewSpec::default();
        assert_eq!((view.width, view.height), (320, 182));
        assert_eq!(view.pixel_count(), 58_240);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let view = ViewSpec {
            width: 0,
            height: 10,
        };
        assert!(matches!(
            view.validate(),
            Err(ConfigError::InvalidView { width: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_huge() {
        let view = ViewSpec {
            width: 320,
            height: 5000,
        };
        assert!(view.validate().is_err());
        assert!(ViewSpec::DEFAULT.validate().is_ok());
    }
}
