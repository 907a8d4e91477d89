use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, ExtendedColorType, ImageEncoder};
use pixfork_image::{
    pixel::{blue, green, red},
    ArgbImage,
};

use crate::error::IoError;

/// Default JPEG quality used by [`crate::save_image`].
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encodes the given image as an 8-bit RGB JPEG in memory.
///
/// The alpha channel is dropped.
///
/// # Arguments
///
/// - `image` - The packed ARGB image.
/// - `quality` - The JPEG quality, 1 to 100.
pub fn encode_image_jpeg_argb(image: &ArgbImage, quality: u8) -> Result<Vec<u8>, IoError> {
    let image_data = image
        .as_slice()
        .iter()
        .flat_map(|&pixel| [red(pixel) as u8, green(pixel) as u8, blue(pixel) as u8])
        .collect::<Vec<u8>>();

    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, quality)
        .write_image(
            &image_data,
            image.width() as u32,
            image.height() as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| IoError::JpegEncodingError(e.to_string()))?;

    Ok(buf.into_inner())
}
