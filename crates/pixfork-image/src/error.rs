/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidPixelCount(usize, usize),

    /// Error when two images that must match have different sizes.
    #[error("Image size mismatch ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a flat pixel index falls outside the image.
    #[error("Pixel index {0} is out of bounds for an image of {1} pixels")]
    PixelIndexOutOfBounds(usize, usize),

    /// Error when a kernel size is zero or even.
    #[error("Invalid kernel size {0}, must be odd and greater than zero")]
    InvalidKernelSize(usize),
}
