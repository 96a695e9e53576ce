use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::detection_params::DetectionParams;

/// Multi-scale sliding-window classifier over a single-channel frame.
pub trait CascadeClassifier {
    fn detect_multi_scale(
        &mut self,
        gray: &Frame,
        params: &DetectionParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
