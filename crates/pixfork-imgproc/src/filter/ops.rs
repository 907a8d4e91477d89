use pixfork_image::ArgbImage;

use super::{BoxBlur1d, SobelEdge};
use crate::parallel::{ParallelError, ParallelExecutor};

/// Blur an image in parallel with a box window over neighbouring flat indices.
///
/// # Arguments
///
/// * `executor` - The fork/join executor.
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `window_size` - The size of the window, odd and greater than zero.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_blur_1d(
    executor: &ParallelExecutor,
    src: &ArgbImage,
    dst: &mut ArgbImage,
    window_size: usize,
) -> Result<(), ParallelError> {
    let kernel = BoxBlur1d::new(window_size)?;
    executor.run(&kernel, src, dst)
}

/// Compute the Sobel edge image in parallel.
///
/// # Arguments
///
/// * `executor` - The fork/join executor.
/// * `src` - The source image.
/// * `dst` - The destination image, its border is set to opaque black.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sobel_edges(
    executor: &ParallelExecutor,
    src: &ArgbImage,
    dst: &mut ArgbImage,
) -> Result<(), ParallelError> {
    executor.run(&SobelEdge, src, dst)
}
