use crate::shared::error::DeviceError;
use crate::shared::frame::Frame;

/// Destination for finished frames.
///
/// A failed `render` leaves the sink usable for the next frame.
pub trait FrameSink {
    fn render(&mut self, frame: &Frame) -> Result<(), DeviceError>;

    /// Releases any handle held across frames. Default: no-op.
    fn close(&mut self) {}
}
