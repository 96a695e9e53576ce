use std::path::PathBuf;

use crate::shared::constants::{
    DEFAULT_FRAMEBUFFER_HEIGHT, DEFAULT_FRAMEBUFFER_PATH, DEFAULT_FRAMEBUFFER_WIDTH,
};

/// Bytes per pixel in the 5-6-5 wire format.
pub const BYTES_PER_PIXEL: usize = 2;

/// Framebuffer target: device path and fixed output resolution.
///
/// The resolution is configuration, never queried from the device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramebufferConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Keep the device open between frames instead of reopening per write.
    pub keep_open: bool,
}

impl FramebufferConfig {
    /// Exact size of one encoded frame.
    pub fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Framebuffer resolution must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for FramebufferConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FRAMEBUFFER_PATH),
            width: DEFAULT_FRAMEBUFFER_WIDTH,
            height: DEFAULT_FRAMEBUFFER_HEIGHT,
            keep_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_720p_fb0() {
        let config = FramebufferConfig::default();
        assert_eq!(config.path, PathBuf::from("/dev/fb0"));
        assert_eq!((config.width, config.height), (1280, 720));
        assert!(!config.keep_open);
        assert_eq!(config.frame_bytes(), 1280 * 720 * 2);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = FramebufferConfig {
            width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
