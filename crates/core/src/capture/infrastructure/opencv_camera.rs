use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::error::{BackendError, InitError, ReadError};
use crate::shared::frame::Frame;

use super::opencv_frames::mat_to_frame;

/// Camera capture through OpenCV's `VideoCapture` (V4L2 on Linux).
///
/// Frames come out as 3-channel BGR at the camera's native resolution.
pub struct OpenCvCamera {
    capture: Option<VideoCapture>,
    index: i32,
    buffer: Mat,
    frame_index: usize,
}

impl OpenCvCamera {
    pub fn open(index: i32) -> Result<Self, InitError> {
        let camera_error = |source: BackendError| InitError::Camera { index, source };

        let capture =
            VideoCapture::new(index, videoio::CAP_ANY).map_err(|e| camera_error(e.into()))?;
        if !capture.is_opened().map_err(|e| camera_error(e.into()))? {
            return Err(camera_error("device could not be opened".into()));
        }

        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH).unwrap_or(0.0);
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0);
        log::info!("Camera {index} opened at {width}x{height}");

        Ok(Self {
            capture: Some(capture),
            index,
            buffer: Mat::default(),
            frame_index: 0,
        })
    }
}

impl FrameSource for OpenCvCamera {
    fn read(&mut self) -> Result<Frame, ReadError> {
        let Some(capture) = self.capture.as_mut() else {
            return Err(ReadError::Backend(format!("camera {} released", self.index)));
        };

        let grabbed = capture
            .read(&mut self.buffer)
            .map_err(|e| ReadError::Backend(e.to_string()))?;
        if !grabbed || self.buffer.empty() {
            return Err(ReadError::EndOfStream);
        }

        let frame = mat_to_frame(&self.buffer, self.frame_index)
            .map_err(|e| ReadError::Backend(e.to_string()))?;
        self.frame_index += 1;
        Ok(frame)
    }

    fn release(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            if let Err(e) = capture.release() {
                log::warn!("Failed to release camera {}: {e}", self.index);
            } else {
                log::debug!("Camera {} released", self.index);
            }
        }
    }
}

impl Drop for OpenCvCamera {
    fn drop(&mut self) {
        self.release();
    }
}
