use opencv::boxed_ref::BoxedRef;
use opencv::core::{self, Mat};
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Copies an 8-bit OpenCV matrix into an owned [`Frame`].
///
/// Non-continuous matrices (ROI views, padded rows) are compacted first.
pub(crate) fn mat_to_frame(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    if mat.depth() != core::CV_8U {
        return Err(opencv::Error::new(
            core::StsUnsupportedFormat,
            format!("expected 8-bit pixels, got depth {}", mat.depth()),
        ));
    }

    let width = mat.cols() as u32;
    let height = mat.rows() as u32;
    let channels = mat.channels() as u8;

    let data = if mat.is_continuous() {
        mat.data_bytes()?.to_vec()
    } else {
        mat.try_clone()?.data_bytes()?.to_vec()
    };

    Ok(Frame::new(data, width, height, channels, index))
}

/// Borrows a single-channel frame as an OpenCV matrix without copying.
pub(crate) fn gray_frame_as_mat(frame: &Frame) -> opencv::Result<BoxedRef<'_, Mat>> {
    if frame.channels() != 1 {
        return Err(opencv::Error::new(
            core::StsBadArg,
            format!("expected a single-channel frame, got {} channels", frame.channels()),
        ));
    }
    Mat::new_rows_cols_with_data(frame.height() as i32, frame.width() as i32, frame.data())
}
