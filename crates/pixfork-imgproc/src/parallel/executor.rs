use pixfork_image::{ArgbImage, ImageError};

use super::{ForkJoinConfig, ParallelError, RangeTask};
use crate::filter::KernelOperator;

/// A fixed-size work-stealing pool that runs [`RangeTask`]s to completion.
///
/// The pool is built once and reused by every call to [`ParallelExecutor::run`].
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
    config: ForkJoinConfig,
}

impl std::fmt::Debug for ParallelExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelExecutor")
            .field("config", &self.config)
            .finish()
    }
}

impl ParallelExecutor {
    /// Build the worker pool.
    ///
    /// # Errors
    ///
    /// Fails if the thread count or the threshold is zero, or if the pool cannot be built.
    pub fn new(config: ForkJoinConfig) -> Result<Self, ParallelError> {
        if config.num_threads == 0 {
            return Err(ParallelError::InvalidThreadCount(config.num_threads));
        }
        if config.threshold == 0 {
            return Err(ParallelError::InvalidThreshold(config.threshold));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .thread_name(|i| format!("pixfork-worker-{i}"))
            .build()
            .map_err(|e| ParallelError::BuildError(e.to_string()))?;

        log::debug!(
            "fork/join pool ready: {} threads, split threshold {}",
            config.num_threads,
            config.threshold
        );

        Ok(Self { pool, config })
    }

    /// Build the pool with [`ForkJoinConfig::default`].
    pub fn with_default() -> Result<Self, ParallelError> {
        Self::new(ForkJoinConfig::default())
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// The split threshold.
    pub fn threshold(&self) -> usize {
        self.config.threshold
    }

    /// Apply `kernel` to every pixel of `src`, writing into `dst`.
    ///
    /// Blocks until the whole destination is written.
    ///
    /// # Arguments
    ///
    /// * `kernel` - The per-pixel operator.
    /// * `src` - The source image.
    /// * `dst` - The destination image, same size as `src`.
    ///
    /// PRECONDITION: `src` and `dst` must have the same shape.
    pub fn run<K>(
        &self,
        kernel: &K,
        src: &ArgbImage,
        dst: &mut ArgbImage,
    ) -> Result<(), ParallelError>
    where
        K: KernelOperator + ?Sized,
    {
        if src.size() != dst.size() {
            return Err(ImageError::InvalidImageSize(
                src.width(),
                src.height(),
                dst.width(),
                dst.height(),
            )
            .into());
        }

        let now = std::time::Instant::now();
        self.run_task(RangeTask::root(src.num_pixels()), kernel, src, dst.as_slice_mut())?;
        log::debug!(
            "processed {} pixels in {:?}",
            src.num_pixels(),
            now.elapsed()
        );

        Ok(())
    }

    /// Run a single task on the pool.
    ///
    /// `dst` holds the destination pixels of the task range only.
    pub fn run_task<K>(
        &self,
        task: RangeTask,
        kernel: &K,
        src: &ArgbImage,
        dst: &mut [u32],
    ) -> Result<(), ParallelError>
    where
        K: KernelOperator + ?Sized,
    {
        let threshold = self.config.threshold;
        self.pool.install(|| task.execute(kernel, src, dst, threshold))
    }
}
