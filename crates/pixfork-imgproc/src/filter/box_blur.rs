use pixfork_image::{
    pixel::{blue, green, pack_opaque, red},
    ArgbImage, ImageError,
};

use super::kernels::{validate_window_size, KernelOperator};

/// Box blur over a window of neighbouring flat indices.
///
/// For the destination index `i` the window covers the source indices
/// `i - side ..= i + side`, each clamped to `[0, num_pixels - 1]`. The window runs along the
/// flat buffer, so near the start and end of a row it reaches into the neighbouring row.
/// See [`crate::sequential::box_blur_2d`] for the square-window blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxBlur1d {
    window_size: usize,
}

impl BoxBlur1d {
    /// Create a new box blur.
    ///
    /// # Arguments
    ///
    /// * `window_size` - The size of the window, odd and greater than zero.
    pub fn new(window_size: usize) -> Result<Self, ImageError> {
        Ok(Self {
            window_size: validate_window_size(window_size)?,
        })
    }

    /// The size of the window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of pixels taken on each side of the center.
    pub fn side_pixels(&self) -> usize {
        (self.window_size - 1) / 2
    }
}

impl KernelOperator for BoxBlur1d {
    fn apply(&self, src: &ArgbImage, index: usize) -> Result<u32, ImageError> {
        let data = src.as_slice();
        if index >= data.len() {
            return Err(ImageError::PixelIndexOutOfBounds(index, data.len()));
        }

        let side = self.side_pixels();
        let last = data.len() - 1;
        let weight = self.window_size as f32;

        let (mut rt, mut gt, mut bt) = (0f32, 0f32, 0f32);
        // the window may start before index 0, hence the saturating lower bound
        for mi in 0..self.window_size {
            let mindex = (index + mi).saturating_sub(side).min(last);
            let pixel = data[mindex];
            rt += red(pixel) as f32 / weight;
            gt += green(pixel) as f32 / weight;
            bt += blue(pixel) as f32 / weight;
        }

        Ok(pack_opaque(rt as u32, gt as u32, bt as u32))
    }
}
