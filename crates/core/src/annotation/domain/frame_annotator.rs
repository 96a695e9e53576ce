use crate::shared::constants::{DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_THICKNESS};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for drawing detection overlays onto a frame.
///
/// Implementations modify the frame in place.
pub trait FrameAnnotator {
    fn annotate(&self, frame: &mut Frame, regions: &[Region])
        -> Result<(), Box<dyn std::error::Error>>;
}

/// Outline appearance: colour in B, G, R order and stroke width in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotationStyle {
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_OUTLINE_COLOR,
            thickness: DEFAULT_OUTLINE_THICKNESS,
        }
    }
}
