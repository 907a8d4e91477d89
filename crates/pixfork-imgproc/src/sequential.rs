//! Single-threaded nested-loop filters.
//!
//! These are the reference results the fork/join engine is checked against, and the cheaper
//! path for images too small to amortize the pool.

use pixfork_image::{
    pixel::{blue, green, pack_opaque, red, OPAQUE_BLACK},
    ArgbImage, ImageError,
};

use crate::filter::{kernels::validate_window_size, sobel_at, KernelOperator};

fn check_same_size(src: &ArgbImage, dst: &ArgbImage) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }
    Ok(())
}

/// Apply a kernel to every index in order, without splitting.
///
/// # Arguments
///
/// * `kernel` - The per-pixel operator.
/// * `src` - The source image.
/// * `dst` - The destination image.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn run_direct<K>(kernel: &K, src: &ArgbImage, dst: &mut ArgbImage) -> Result<(), ImageError>
where
    K: KernelOperator + ?Sized,
{
    check_same_size(src, dst)?;
    for (index, dst_pixel) in dst.as_slice_mut().iter_mut().enumerate() {
        *dst_pixel = kernel.apply(src, index)?;
    }
    Ok(())
}

/// Blur an image with a square `window_size x window_size` box.
///
/// Each coordinate is clamped to the image independently, so the window never leaves its
/// row. Every sample is weighted by `1 / window_size²`.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `window_size` - The size of the window, odd and greater than zero.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_blur_2d(
    src: &ArgbImage,
    dst: &mut ArgbImage,
    window_size: usize,
) -> Result<(), ImageError> {
    let window_size = validate_window_size(window_size)?;
    check_same_size(src, dst)?;

    let (width, height) = (src.width(), src.height());
    let side = (window_size - 1) / 2;
    let weight = (window_size * window_size) as f32;
    let data = src.as_slice();
    let out = dst.as_slice_mut();

    for y in 0..height {
        for x in 0..width {
            let (mut rt, mut gt, mut bt) = (0f32, 0f32, 0f32);

            for ky in 0..window_size {
                let pixel_y = (y + ky).saturating_sub(side).min(height - 1);
                for kx in 0..window_size {
                    let pixel_x = (x + kx).saturating_sub(side).min(width - 1);
                    let pixel = data[pixel_y * width + pixel_x];

                    rt += red(pixel) as f32 / weight;
                    gt += green(pixel) as f32 / weight;
                    bt += blue(pixel) as f32 / weight;
                }
            }

            out[y * width + x] = pack_opaque(rt as u32, gt as u32, bt as u32);
        }
    }

    Ok(())
}

/// Compute the Sobel edge image with nested loops over the interior.
///
/// The four border lines are painted opaque black after the interior pass.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sobel_edges(src: &ArgbImage, dst: &mut ArgbImage) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    if src.is_empty() {
        return Ok(());
    }

    let (width, height) = (src.width(), src.height());

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let index = dst.flat_index(x, y);
            dst.as_slice_mut()[index] = sobel_at(src, x, y);
        }
    }

    let out = dst.as_slice_mut();
    for x in 0..width {
        out[x] = OPAQUE_BLACK;
        out[(height - 1) * width + x] = OPAQUE_BLACK;
    }
    for y in 0..height {
        out[y * width] = OPAQUE_BLACK;
        out[y * width + (width - 1)] = OPAQUE_BLACK;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{BoxBlur1d, SobelEdge};

    #[test]
    fn test_box_blur_2d_corner() -> Result<(), ImageError> {
        // white top-left pixel on a black 5x5 image
        let mut src = ArgbImage::from_size_val([5, 5].into(), OPAQUE_BLACK)?;
        src.as_slice_mut()[0] = 0xFFFF_FFFF;

        let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
        box_blur_2d(&src, &mut dst, 3)?;

        // the clamped 3x3 window at (0, 0) samples the corner 4 times, 4 * 255 / 9
        let mut expected = vec![OPAQUE_BLACK; 25];
        expected[0] = 0xFF71_7171;
        // 2 * 255 / 9
        expected[1] = 0xFF38_3838;
        expected[5] = 0xFF38_3838;
        // 255 / 9
        expected[6] = 0xFF1C_1C1C;
        assert_eq!(dst.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn test_box_blur_2d_far_corner() -> Result<(), ImageError> {
        // white bottom-right pixel, the window clamps against the right and bottom edges
        let mut src = ArgbImage::from_size_val([5, 5].into(), OPAQUE_BLACK)?;
        src.as_slice_mut()[24] = 0xFFFF_FFFF;

        let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
        box_blur_2d(&src, &mut dst, 3)?;

        let mut expected = vec![OPAQUE_BLACK; 25];
        expected[24] = 0xFF71_7171;
        expected[23] = 0xFF38_3838;
        expected[19] = 0xFF38_3838;
        expected[18] = 0xFF1C_1C1C;
        assert_eq!(dst.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn test_box_blur_2d_window_larger_than_image() -> Result<(), ImageError> {
        // 3x2 image, only (2, 1) is white: every pixel's 15x15 window clamps on all sides
        let mut src = ArgbImage::from_size_val([3, 2].into(), OPAQUE_BLACK)?;
        src.as_slice_mut()[5] = 0xFFFF_FFFF;

        let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
        box_blur_2d(&src, &mut dst, 15)?;

        // (x + 6) * (y + 7) samples land on the white pixel, each worth 255 / 225
        #[rustfmt::skip]
        let expected = [
            0xFF2F_2F2F, 0xFF37_3737, 0xFF3F_3F3F,
            0xFF36_3636, 0xFF3F_3F3F, 0xFF48_4848,
        ];
        assert_eq!(dst.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn test_box_blur_2d_differs_from_1d() -> Result<(), ImageError> {
        let mut src = ArgbImage::from_size_val([5, 5].into(), OPAQUE_BLACK)?;
        src.as_slice_mut()[0] = 0xFFFF_FFFF;

        let mut square = ArgbImage::from_size_val(src.size(), 0)?;
        box_blur_2d(&src, &mut square, 3)?;

        let mut flat = ArgbImage::from_size_val(src.size(), 0)?;
        run_direct(&BoxBlur1d::new(3)?, &src, &mut flat)?;

        assert_ne!(square, flat);
        Ok(())
    }

    #[test]
    fn test_box_blur_2d_uniform() -> Result<(), ImageError> {
        let src = ArgbImage::from_size_val([7, 4].into(), 0x00_30_60_90)?;
        let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
        box_blur_2d(&src, &mut dst, 1)?;
        assert!(dst.as_slice().iter().all(|&p| p == 0xFF_30_60_90));
        Ok(())
    }

    #[test]
    fn test_box_blur_2d_invalid() -> Result<(), ImageError> {
        let src = ArgbImage::from_size_val([2, 2].into(), 0)?;
        let mut dst = ArgbImage::from_size_val([2, 3].into(), 0)?;
        assert_eq!(
            box_blur_2d(&src, &mut dst, 3),
            Err(ImageError::InvalidImageSize(2, 2, 2, 3))
        );
        let mut dst = src.clone();
        assert_eq!(
            box_blur_2d(&src, &mut dst, 0),
            Err(ImageError::InvalidKernelSize(0))
        );
        Ok(())
    }

    #[test]
    fn test_sobel_edges_gray() -> Result<(), ImageError> {
        let src = ArgbImage::from_size_val([3, 3].into(), 0xFF80_8080)?;
        let mut dst = ArgbImage::from_size_val(src.size(), 0x1234_5678)?;
        sobel_edges(&src, &mut dst)?;
        assert!(dst.as_slice().iter().all(|&p| p == OPAQUE_BLACK));
        Ok(())
    }

    #[test]
    fn test_sobel_edges_matches_kernel() -> Result<(), ImageError> {
        let src = ArgbImage::new(
            [6, 5].into(),
            (0..30u32).map(|i| i.wrapping_mul(0x0097_3A5B)).collect(),
        )?;

        let mut looped = ArgbImage::from_size_val(src.size(), 0)?;
        sobel_edges(&src, &mut looped)?;

        let mut direct = ArgbImage::from_size_val(src.size(), 0)?;
        run_direct(&SobelEdge, &src, &mut direct)?;

        assert_eq!(looped, direct);
        Ok(())
    }

    #[test]
    fn test_sobel_edges_thin_images() -> Result<(), ImageError> {
        for size in [[1, 1], [1, 4], [4, 1], [2, 2]] {
            let src = ArgbImage::from_size_val(size.into(), 0xFFFF_FFFF)?;
            let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
            sobel_edges(&src, &mut dst)?;
            assert!(dst.as_slice().iter().all(|&p| p == OPAQUE_BLACK));
        }
        Ok(())
    }

    #[test]
    fn test_run_direct_alpha() -> Result<(), ImageError> {
        let src = ArgbImage::from_size_val([4, 4].into(), 0x0000_0000)?;
        let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
        run_direct(&BoxBlur1d::new(3)?, &src, &mut dst)?;
        assert!(dst.as_slice().iter().all(|&p| p & 0xFF00_0000 == 0xFF00_0000));
        Ok(())
    }
}
