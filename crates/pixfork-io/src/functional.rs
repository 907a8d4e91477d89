use std::{io::Write, path::Path};

use pixfork_image::{pixel::from_rgba8, ArgbImage, ImageSize};

use crate::{
    error::IoError,
    jpeg::{encode_image_jpeg_argb, DEFAULT_JPEG_QUALITY},
    png::encode_image_png_argb,
};

/// Container formats supported by [`save_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable network graphics, 8-bit RGBA.
    Png,
    /// JPEG, 8-bit RGB.
    Jpeg,
}

impl ImageFormat {
    /// Pick the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] for anything but `png`, `jpg` and `jpeg`.
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let extension = file_path
            .extension()
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

        match extension.to_str() {
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
        }
    }
}

/// Reads an image from the given file path into a packed ARGB buffer.
///
/// The method tries to read from any image format supported by the image crate, guessing
/// the format from the file content first and the extension second.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image with one `0xAARRGGBB` value per pixel.
pub fn load_image(file_path: impl AsRef<Path>) -> Result<ArgbImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    let data = img.pixels().map(|p| from_rgba8(p.0)).collect();

    log::debug!("loaded {} as {}", file_path.display(), size);

    Ok(ArgbImage::new(size, data)?)
}

/// Writes the given image to the file path in the requested format.
///
/// The image is encoded in memory and written to a temporary file next to the target, which
/// is then renamed into place. On failure no file is left at `file_path`.
///
/// # Arguments
///
/// * `image` - The packed ARGB image.
/// * `file_path` - The destination path.
/// * `format` - The container format.
pub fn save_image(
    image: &ArgbImage,
    file_path: impl AsRef<Path>,
    format: ImageFormat,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let bytes = match format {
        ImageFormat::Png => encode_image_png_argb(image)?,
        ImageFormat::Jpeg => encode_image_jpeg_argb(image, DEFAULT_JPEG_QUALITY)?,
    };

    write_replace(file_path, &bytes)?;
    log::debug!("saved {} ({} bytes)", file_path.display(), bytes.len());

    Ok(())
}

// write to a uniquely named sibling temp file and rename it over the target
fn write_replace(file_path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let parent = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // the temp file is removed on drop if anything below fails
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(file_path).map_err(|e| e.error)?;

    Ok(())
}
