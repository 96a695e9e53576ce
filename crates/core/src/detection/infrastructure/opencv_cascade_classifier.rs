use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect;
use opencv::prelude::*;

use crate::capture::infrastructure::opencv_frames::gray_frame_as_mat;
use crate::detection::domain::cascade_classifier::CascadeClassifier;
use crate::detection::domain::detection_params::DetectionParams;
use crate::shared::error::{BackendError, InitError};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Haar/LBP cascade from OpenCV's `objdetect` module.
pub struct OpenCvCascadeClassifier {
    inner: objdetect::CascadeClassifier,
    hits: Vector<Rect>,
}

impl OpenCvCascadeClassifier {
    pub fn load(path: &Path) -> Result<Self, InitError> {
        let load_error = |source: BackendError| InitError::Classifier {
            path: path.to_path_buf(),
            source,
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| load_error("path is not valid UTF-8".into()))?;
        let inner =
            objdetect::CascadeClassifier::new(path_str).map_err(|e| load_error(e.into()))?;
        if inner.empty().map_err(|e| load_error(e.into()))? {
            return Err(load_error("file holds no cascade stages".into()));
        }

        log::info!("Loaded cascade classifier {}", path.display());
        Ok(Self {
            inner,
            hits: Vector::new(),
        })
    }
}

impl CascadeClassifier for OpenCvCascadeClassifier {
    fn detect_multi_scale(
        &mut self,
        gray: &Frame,
        params: &DetectionParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let mat = gray_frame_as_mat(gray)?;
        let min_side = params.min_size as i32;

        self.hits.clear();
        self.inner.detect_multi_scale(
            &mat,
            &mut self.hits,
            params.scale_factor,
            params.min_neighbors,
            0,
            Size::new(min_side, min_side),
            Size::new(0, 0),
        )?;

        Ok(self
            .hits
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}
