/// An axis-aligned face rectangle in the coordinate space of the frame it
/// was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clips the rectangle to `[0, frame_width) x [0, frame_height)`.
    ///
    /// Returns `None` when nothing of the rectangle lies inside the frame.
    pub fn clamped(&self, frame_width: u32, frame_height: u32) -> Option<Region> {
        let fw = i64::from(frame_width);
        let fh = i64::from(frame_height);
        let x1 = i64::from(self.x).clamp(0, fw);
        let y1 = i64::from(self.y).clamp(0, fh);
        let x2 = (i64::from(self.x) + i64::from(self.width)).clamp(0, fw);
        let y2 = (i64::from(self.y) + i64::from(self.height)).clamp(0, fh);

        let clipped = Region {
            x: x1 as i32,
            y: y1 as i32,
            width: (x2 - x1) as i32,
            height: (y2 - y1) as i32,
        };
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Whether the rectangle lies fully inside a frame of the given size.
    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && i64::from(self.x) + i64::from(self.width) <= i64::from(frame_width)
            && i64::from(self.y) + i64::from(self.height) <= i64::from(frame_height)
    }

    /// Clips every region to the frame, dropping those left empty.
    pub fn clamp_all(regions: &[Region], frame_width: u32, frame_height: u32) -> Vec<Region> {
        regions
            .iter()
            .filter_map(|r| r.clamped(frame_width, frame_height))
            .collect()
    }
}
