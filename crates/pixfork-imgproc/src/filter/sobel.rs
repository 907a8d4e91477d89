use pixfork_image::{
    pixel::{blue, green, pack_opaque, red, OPAQUE_BLACK},
    ArgbImage, ImageError,
};

use super::kernels::{KernelOperator, SOBEL_GX, SOBEL_GY};

/// Sobel gradient magnitude, per color channel.
///
/// Pixels on the image border are set to opaque black without sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SobelEdge;

impl SobelEdge {
    /// Whether `(x, y)` lies on the one pixel wide border of an image of the given size.
    #[inline]
    pub fn is_border(x: usize, y: usize, width: usize, height: usize) -> bool {
        x == 0 || x + 1 == width || y == 0 || y + 1 == height
    }
}

impl KernelOperator for SobelEdge {
    fn apply(&self, src: &ArgbImage, index: usize) -> Result<u32, ImageError> {
        if index >= src.num_pixels() {
            return Err(ImageError::PixelIndexOutOfBounds(index, src.num_pixels()));
        }

        let (x, y) = src.coords(index);
        if Self::is_border(x, y, src.width(), src.height()) {
            return Ok(OPAQUE_BLACK);
        }

        Ok(sobel_at(src, x, y))
    }
}

/// Compute the Sobel edge pixel at the interior coordinates `(x, y)`.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `x` - Column, in `1..width - 1`.
/// * `y` - Row, in `1..height - 1`.
///
/// PRECONDITION: `(x, y)` is not a border pixel.
pub(crate) fn sobel_at(src: &ArgbImage, x: usize, y: usize) -> u32 {
    let data = src.as_slice();
    let width = src.width();

    let (mut gx_red, mut gx_green, mut gx_blue) = (0f32, 0f32, 0f32);
    let (mut gy_red, mut gy_green, mut gy_blue) = (0f32, 0f32, 0f32);

    for ky in 0..3 {
        for kx in 0..3 {
            let pixel = data[(y + ky - 1) * width + (x + kx - 1)];

            let r = red(pixel) as i32;
            let g = green(pixel) as i32;
            let b = blue(pixel) as i32;

            gx_red += (r * SOBEL_GX[ky][kx]) as f32;
            gx_green += (g * SOBEL_GX[ky][kx]) as f32;
            gx_blue += (b * SOBEL_GX[ky][kx]) as f32;

            gy_red += (r * SOBEL_GY[ky][kx]) as f32;
            gy_green += (g * SOBEL_GY[ky][kx]) as f32;
            gy_blue += (b * SOBEL_GY[ky][kx]) as f32;
        }
    }

    pack_opaque(
        magnitude(gx_red, gy_red),
        magnitude(gx_green, gy_green),
        magnitude(gx_blue, gy_blue),
    )
}

// gradient magnitude saturated to a channel value
#[inline]
fn magnitude(gx: f32, gy: f32) -> u32 {
    ((gx * gx + gy * gy) as f64).sqrt().min(255.0) as u32
}
