use crate::shared::error::ReadError;
use crate::shared::frame::Frame;

/// A live source of colour frames, typically a camera.
///
/// `read` blocks until a frame is available. `release` must be safe to
/// call more than once.
pub trait FrameSource {
    fn read(&mut self) -> Result<Frame, ReadError>;

    fn release(&mut self);
}
