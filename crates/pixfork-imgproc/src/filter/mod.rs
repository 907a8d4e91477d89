//! Filter operations
//!
//! This module provides the per-pixel kernels and the parallel filter entry points.

/// Filter kernels
pub mod kernels;
pub use kernels::KernelOperator;

/// Box blur over a flat index window
mod box_blur;
pub use box_blur::BoxBlur1d;

/// Sobel edge detection
mod sobel;
pub(crate) use sobel::sobel_at;
pub use sobel::SobelEdge;

/// Filter operations
mod ops;
pub use ops::*;
