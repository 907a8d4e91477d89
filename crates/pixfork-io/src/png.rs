use pixfork_image::{pixel::to_rgba8, ArgbImage};
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;

/// Encodes the given image as an 8-bit RGBA PNG in memory.
///
/// # Arguments
///
/// - `image` - The packed ARGB image.
///
/// # Returns
///
/// The bytes of the PNG file.
pub fn encode_image_png_argb(image: &ArgbImage) -> Result<Vec<u8>, IoError> {
    let image_data = image
        .as_slice()
        .iter()
        .flat_map(|&pixel| to_rgba8(pixel))
        .collect::<Vec<u8>>();

    let mut buf = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .write_image_data(&image_data)
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_signature() -> Result<(), IoError> {
        let image = ArgbImage::from_size_val([4, 2].into(), 0xFF11_2233)?;
        let bytes = encode_image_png_argb(&image)?;
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        Ok(())
    }
}
