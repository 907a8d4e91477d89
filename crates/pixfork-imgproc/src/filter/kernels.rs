use pixfork_image::{ArgbImage, ImageError};

/// Default window size of the box blur.
pub const DEFAULT_BLUR_WINDOW: usize = 15;

/// Horizontal Sobel gradient kernel, indexed `[ky][kx]`.
pub const SOBEL_GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel gradient kernel, indexed `[ky][kx]`.
pub const SOBEL_GY: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// A pure per-pixel operator.
///
/// Maps a source image and a flat destination index to the destination pixel value.
/// Implementations hold no mutable state, so a single operator can be shared by all the
/// workers writing disjoint destination indices.
pub trait KernelOperator: Send + Sync {
    /// Compute the destination pixel at the flat `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if `index` is outside the source image.
    fn apply(&self, src: &ArgbImage, index: usize) -> Result<u32, ImageError>;
}

/// Check that a blur window size is odd and greater than zero.
///
/// # Arguments
///
/// * `window_size` - The size of the window.
///
/// # Returns
///
/// The validated window size.
pub fn validate_window_size(window_size: usize) -> Result<usize, ImageError> {
    if window_size == 0 || window_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(window_size));
    }
    Ok(window_size)
}
