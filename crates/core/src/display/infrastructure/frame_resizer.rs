use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::shared::frame::Frame;

/// Resizes a 3-channel frame to exactly `width x height` with a bilinear
/// (triangle) filter. Aspect ratio is not preserved.
///
/// The channel order is carried through untouched. Frames already at the
/// target size are borrowed without copying.
pub fn resize_bilinear(frame: &Frame, width: u32, height: u32) -> Result<Cow<'_, [u8]>, String> {
    if frame.channels() != 3 {
        return Err(format!(
            "expected a 3-channel frame, got {} channels",
            frame.channels()
        ));
    }
    if frame.width() == 0 || frame.height() == 0 {
        return Err("frame has no pixels".into());
    }
    if frame.width() == width && frame.height() == height {
        return Ok(Cow::Borrowed(frame.data()));
    }

    let img = RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or("frame data does not match its dimensions")?;
    let resized = imageops::resize(&img, width, height, FilterType::Triangle);
    Ok(Cow::Owned(resized.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn make_frame(width: u32, height: u32, bgr: [u8; 3]) -> Frame {
        let data = bgr.repeat((width * height) as usize);
        Frame::new(data, width, height, 3, 0)
    }

    #[test]
    fn test_same_size_is_borrowed() {
        let frame = make_frame(16, 9, [1, 2, 3]);
        let out = resize_bilinear(&frame, 16, 9).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&out[..], frame.data());
    }

    #[rstest]
    #[case::upscale(64, 48, 128, 72)]
    #[case::downscale(640, 480, 160, 90)]
    #[case::aspect_change(40, 40, 128, 72)]
    fn test_output_has_target_size(
        #[case] w: u32,
        #[case] h: u32,
        #[case] tw: u32,
        #[case] th: u32,
    ) {
        let frame = make_frame(w, h, [10, 20, 30]);
        let out = resize_bilinear(&frame, tw, th).unwrap();
        assert_eq!(out.len(), (tw * th * 3) as usize);
    }

    #[test]
    fn test_uniform_colour_preserved_in_channel_order() {
        let frame = make_frame(32, 24, [200, 100, 50]);
        let out = resize_bilinear(&frame, 64, 36).unwrap();
        for px in out.chunks_exact(3) {
            assert_eq!(px, &[200, 100, 50]);
        }
    }

    #[test]
    fn test_grayscale_rejected() {
        let frame = Frame::new(vec![0; 16], 4, 4, 1, 0);
        assert!(resize_bilinear(&frame, 8, 8).is_err());
    }

    #[test]
    fn test_empty_frame_rejected() {
        let frame = Frame::new(Vec::new(), 0, 0, 3, 0);
        assert!(resize_bilinear(&frame, 8, 8).is_err());
    }
}
