#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::load_image`] and [`functional::save_image`].
pub mod functional;

/// PNG image encoding.
pub mod png;

/// JPEG image encoding.
pub mod jpeg;

pub use crate::error::IoError;
pub use crate::functional::{load_image, save_image, ImageFormat};
