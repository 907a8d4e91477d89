use std::ops::Range;

use pixfork_image::ArgbImage;

use super::ParallelError;
use crate::filter::KernelOperator;

/// What a [`RangeTask`] does with its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPlan {
    /// Apply the kernel to every index of the range on the current thread.
    Leaf,
    /// Fork the two halves and join them.
    Split(RangeTask, RangeTask),
}

/// A splittable unit of work over the destination indices `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeTask {
    start: usize,
    length: usize,
}

impl RangeTask {
    /// Create a task over `[start, start + length)`.
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Create the task covering `[0, len)`.
    pub fn root(len: usize) -> Self {
        Self::new(0, len)
    }

    /// First index of the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the range is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The indices covered by the task.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.length
    }

    /// Split the range at its midpoint.
    ///
    /// The two halves are contiguous, disjoint and together cover exactly this range.
    pub fn split(&self) -> (RangeTask, RangeTask) {
        let mid = self.length / 2;
        (
            RangeTask::new(self.start, mid),
            RangeTask::new(self.start + mid, self.length - mid),
        )
    }

    /// Decide whether the range is computed directly or split.
    ///
    /// Ranges shorter than `threshold`, and ranges of fewer than two indices, are leaves.
    pub fn plan(&self, threshold: usize) -> TaskPlan {
        if self.length < threshold || self.length < 2 {
            return TaskPlan::Leaf;
        }
        let (left, right) = self.split();
        TaskPlan::Split(left, right)
    }

    /// Run the task, writing `kernel(src, i)` into `dst[i - start]` for every index `i`.
    ///
    /// When the task splits, each half receives its own part of `dst`, so no index is ever
    /// written by two tasks. Errors in either half are returned once both halves have joined.
    ///
    /// # Arguments
    ///
    /// * `kernel` - The per-pixel operator.
    /// * `src` - The source image.
    /// * `dst` - The destination slice for this range, `dst.len() == self.len()`.
    /// * `threshold` - The split threshold.
    pub fn execute<K>(
        &self,
        kernel: &K,
        src: &ArgbImage,
        dst: &mut [u32],
        threshold: usize,
    ) -> Result<(), ParallelError>
    where
        K: KernelOperator + ?Sized,
    {
        if dst.len() != self.length {
            return Err(ParallelError::SizeMismatch(dst.len(), self.length));
        }

        let end = self.start.checked_add(self.length);
        if end.map_or(true, |end| end > src.num_pixels()) {
            return Err(ParallelError::RangeOutOfBounds {
                start: self.start,
                length: self.length,
                len: src.num_pixels(),
            });
        }

        match self.plan(threshold) {
            TaskPlan::Leaf => self.compute_directly(kernel, src, dst),
            TaskPlan::Split(left, right) => {
                let (dst_left, dst_right) = dst.split_at_mut(left.len());
                let (res_left, res_right) = rayon::join(
                    || left.execute(kernel, src, dst_left, threshold),
                    || right.execute(kernel, src, dst_right, threshold),
                );
                res_left?;
                res_right
            }
        }
    }

    fn compute_directly<K>(
        &self,
        kernel: &K,
        src: &ArgbImage,
        dst: &mut [u32],
    ) -> Result<(), ParallelError>
    where
        K: KernelOperator + ?Sized,
    {
        for (index, dst_pixel) in self.range().zip(dst.iter_mut()) {
            *dst_pixel = kernel.apply(src, index)?;
        }
        Ok(())
    }
}
