//! Fork/join execution of per-pixel kernels.
//!
//! A [`RangeTask`] covers a contiguous range of destination indices and either applies a
//! kernel directly or splits in two halves that run through [`rayon::join`]. The
//! [`ParallelExecutor`] owns the worker pool and drives a root task over a whole image.

use thiserror::Error;

use pixfork_image::ImageError;

mod executor;
pub use executor::ParallelExecutor;

mod range_task;
pub use range_task::{RangeTask, TaskPlan};

/// Default number of indices below which a task is computed without splitting.
pub const DEFAULT_SPLIT_THRESHOLD: usize = 10_000;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The split threshold is invalid.
    #[error("split threshold must be > 0, got {0}")]
    InvalidThreshold(usize),

    /// The destination slice does not cover the task range.
    #[error("destination slice has {0} elements but the task covers {1}")]
    SizeMismatch(usize, usize),

    /// The task range reaches past the end of the source image.
    #[error("range [{start}, {start} + {length}) is out of bounds for {len} pixels")]
    RangeOutOfBounds {
        /// First index of the range.
        start: usize,
        /// Number of indices in the range.
        length: usize,
        /// Number of pixels in the source image.
        len: usize,
    },

    /// A kernel or image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Configuration of the fork/join executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkJoinConfig {
    /// Ranges shorter than this are computed directly.
    pub threshold: usize,
    /// Number of worker threads in the pool.
    pub num_threads: usize,
}

impl Default for ForkJoinConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SPLIT_THRESHOLD,
            num_threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl ForkJoinConfig {
    /// Set the split threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of worker threads.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }
}
