use ndarray::{ArrayView3, ArrayViewMut3};

/// Luma weights applied to the B, G and R channels (ITU-R BT.601).
const LUMA_WEIGHTS_BGR: [f32; 3] = [0.114, 0.587, 0.299];

/// A single captured frame: contiguous interleaved bytes in row-major order.
///
/// Colour frames are 3-channel B,G,R as delivered by the camera. A
/// single-channel frame holds luma and only ever feeds the detector.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Derives the single-channel luma frame used as detector input.
    ///
    /// Single-channel input is returned as a copy.
    pub fn to_grayscale(&self) -> Frame {
        if self.channels == 1 {
            return self.clone();
        }
        let stride = self.channels as usize;
        let luma = self
            .data
            .chunks_exact(stride)
            .map(|px| {
                let y = LUMA_WEIGHTS_BGR[0] * px[0] as f32
                    + LUMA_WEIGHTS_BGR[1] * px[1] as f32
                    + LUMA_WEIGHTS_BGR[2] * px[2] as f32;
                y.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        Frame::new(luma, self.width, self.height, 1, self.index)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
