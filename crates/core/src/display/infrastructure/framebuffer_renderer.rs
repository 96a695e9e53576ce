use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};

use crate::display::domain::frame_sink::FrameSink;
use crate::display::domain::framebuffer_config::FramebufferConfig;
use crate::shared::error::DeviceError;
use crate::shared::frame::Frame;

use super::bgr565;
use super::frame_resizer::resize_bilinear;

/// Writes full frames to a raw Linux framebuffer device in 5-6-5 format.
///
/// Each call resizes to the configured resolution, packs every pixel into
/// two bytes and issues one write of exactly `width * height * 2` bytes at
/// offset 0. The device is reopened per frame unless `keep_open` is set, in
/// which case the handle is reused and dropped after any failure.
pub struct FramebufferRenderer {
    config: FramebufferConfig,
    device: Option<File>,
    encoded: Vec<u8>,
}

impl FramebufferRenderer {
    pub fn new(config: FramebufferConfig) -> Self {
        Self {
            config,
            device: None,
            encoded: Vec::new(),
        }
    }

    fn encode(&mut self, frame: &Frame) -> Result<(), DeviceError> {
        let resized = resize_bilinear(frame, self.config.width, self.config.height)
            .map_err(DeviceError::InvalidFrame)?;

        self.encoded.clear();
        bgr565::encode_into(&resized, &mut self.encoded);

        let expected = self.config.frame_bytes();
        if self.encoded.len() != expected {
            return Err(DeviceError::FrameSize {
                expected,
                actual: self.encoded.len(),
            });
        }
        Ok(())
    }

    fn open_device(&self) -> Result<File, DeviceError> {
        OpenOptions::new()
            .write(true)
            .open(&self.config.path)
            .map_err(|source| DeviceError::Open {
                path: self.config.path.clone(),
                source,
            })
    }

    fn write_encoded(&mut self) -> Result<(), DeviceError> {
        let mut device = match self.device.take() {
            Some(device) => device,
            None => self.open_device()?,
        };

        let written = device
            .seek(SeekFrom::Start(0))
            .and_then(|_| device.write_all(&self.encoded));
        if let Err(source) = written {
            return Err(DeviceError::Write {
                path: self.config.path.clone(),
                source,
            });
        }

        if self.config.keep_open {
            self.device = Some(device);
        }
        Ok(())
    }
}

impl FrameSink for FramebufferRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), DeviceError> {
        if !self.config.path.exists() {
            self.device = None;
            return Err(DeviceError::Missing(self.config.path.clone()));
        }

        self.encode(frame)?;
        self.write_encoded()
    }

    fn close(&mut self) {
        if self.device.take().is_some() {
            log::debug!("Closed framebuffer {}", self.config.path.display());
        }
    }
}
