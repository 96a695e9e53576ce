use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection on a colour frame.
///
/// Implementations may hold backend state, hence `&mut self`.
pub trait FaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
