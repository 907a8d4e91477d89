#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// packed ARGB image representation.
pub mod image;

/// Error types for the image module.
pub mod error;

/// helpers to pack and unpack ARGB pixels.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{ArgbImage, ImageSize};
