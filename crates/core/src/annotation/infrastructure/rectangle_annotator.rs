use ndarray::{s, ArrayView1, Axis};

use crate::annotation::domain::frame_annotator::{AnnotationStyle, FrameAnnotator};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws a solid rectangular outline around each region.
///
/// The stroke lies inside the rectangle: a `thickness`-wide band along each
/// edge of `[x, x + width) x [y, y + height)`. Interior pixels are never
/// touched, so redrawing the same regions only rewrites border pixels.
///
/// This differs from OpenCV's `rectangle`, which centres a thick stroke on
/// the edge and so also paints column `x + width` and row `y + height`. The
/// outline here never leaves the region, and never the frame once clipped.
pub struct RectangleAnnotator {
    style: AnnotationStyle,
}

impl RectangleAnnotator {
    pub fn new(style: AnnotationStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }
}

impl Default for RectangleAnnotator {
    fn default() -> Self {
        Self::new(AnnotationStyle::default())
    }
}

impl FrameAnnotator for RectangleAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if regions.is_empty() || self.style.thickness == 0 {
            return Ok(());
        }
        if frame.channels() != 3 {
            return Err(format!(
                "outline drawing needs a 3-channel frame, got {} channels",
                frame.channels()
            )
            .into());
        }

        let (fw, fh) = (frame.width(), frame.height());
        let t = self.style.thickness as usize;
        let color = ArrayView1::from(&self.style.color[..]);
        let mut pixels = frame.as_ndarray_mut();

        for r in regions.iter().filter_map(|r| r.clamped(fw, fh)) {
            let (x0, y0) = (r.x as usize, r.y as usize);
            let (x1, y1) = (x0 + r.width as usize, y0 + r.height as usize);

            let bands = [
                (y0, (y0 + t).min(y1), x0, x1),
                (y1.saturating_sub(t).max(y0), y1, x0, x1),
                (y0, y1, x0, (x0 + t).min(x1)),
                (y0, y1, x1.saturating_sub(t).max(x0), x1),
            ];
            for (ya, yb, xa, xb) in bands {
                let mut band = pixels.slice_mut(s![ya..yb, xa..xb, ..]);
                for mut px in band.lanes_mut(Axis(2)) {
                    px.assign(&color);
                }
            }
        }

        Ok(())
    }
}
