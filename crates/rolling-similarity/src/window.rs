//! Zero-copy sliding windows over a [`TimeSeriesMatrix`]
//!
//! A [`Window`] is the parent reference plus a `{start, len}` row range.
//! Creating one is O(1); nothing is copied until a kernel reads it.

use crate::matrix::TimeSeriesMatrix;
use nalgebra::DMatrixSlice;
use rolling_core::{Error, Result};
use std::iter::FusedIterator;

/// Number of valid window starts: `max(0, n_steps - window_size + 1)`
///
/// A zero `window_size` has no valid windows.
pub fn window_count(n_steps: usize, window_size: usize) -> usize {
    if window_size == 0 {
        return 0;
    }
    n_steps.checked_sub(window_size).map_or(0, |d| d + 1)
}

/// Rows `[start, start + len)` of a matrix, all channels
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    source: &'a TimeSeriesMatrix,
    start: usize,
    len: usize,
}

impl<'a> Window<'a> {
    /// Caller guarantees `len >= 1` and `start + len <= source.n_steps()`
    #[inline]
    pub(crate) fn at(source: &'a TimeSeriesMatrix, start: usize, len: usize) -> Self {
        debug_assert!(len >= 1 && start + len <= source.n_steps());
        Self { source, start, len }
    }

    /// First row of the window in the parent matrix
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of rows (the window size)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: every constructor requires `len >= 1`
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// One past the last row of the window in the parent matrix
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn n_channels(&self) -> usize {
        self.source.n_channels()
    }

    /// Value at window-relative `row`
    ///
    /// # Panics
    /// Panics if `row >= len()` or `channel >= n_channels()`.
    #[inline]
    pub fn value(&self, row: usize, channel: usize) -> f64 {
        assert!(row < self.len, "row {row} out of range for window of {}", self.len);
        self.source.value(self.start + row, channel)
    }

    /// This window's contiguous slice of one channel
    ///
    /// # Panics
    /// Panics if `channel >= n_channels()`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &'a [f64] {
        assert!(
            channel < self.n_channels(),
            "channel {channel} out of range for {} channels",
            self.n_channels()
        );
        let source: &'a TimeSeriesMatrix = self.source;
        source.channel_range(channel, self.start, self.len)
    }

    /// Strided `(len, C)` nalgebra view into the parent storage
    pub fn view(&self) -> DMatrixSlice<'a, f64> {
        let source: &'a TimeSeriesMatrix = self.source;
        source.as_dmatrix().rows(self.start, self.len)
    }
}

/// Iterator over every window of a fixed size, in start order
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    source: &'a TimeSeriesMatrix,
    window_size: usize,
    next: usize,
    count: usize,
}

impl<'a> Windows<'a> {
    /// Window size this iterator was created with
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Window starting at row `start`, independent of iteration progress
    pub fn get(&self, start: usize) -> Option<Window<'a>> {
        (start < self.count).then(|| Window::at(self.source, start, self.window_size))
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.get(self.next)?;
        self.next += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}

/// Every contiguous window of `window_size` rows, in start order
///
/// Returns an empty iterator when `window_size` exceeds the series length.
pub fn extract_windows(matrix: &TimeSeriesMatrix, window_size: usize) -> Result<Windows<'_>> {
    if window_size < 1 {
        return Err(Error::InvalidWindowSize { window_size });
    }

    Ok(Windows {
        source: matrix,
        window_size,
        next: 0,
        count: window_count(matrix.n_steps(), window_size),
    })
}

impl TimeSeriesMatrix {
    /// Bounds-checked window over rows `[start, start + len)`
    pub fn window(&self, start: usize, len: usize) -> Result<Window<'_>> {
        if len < 1 {
            return Err(Error::InvalidWindowSize { window_size: len });
        }
        match start.checked_add(len) {
            Some(end) if end <= self.n_steps() => Ok(Window::at(self, start, len)),
            _ => Err(Error::IndexOutOfRange(format!(
                "window [{start}, {start}+{len}) exceeds {} time steps",
                self.n_steps()
            ))),
        }
    }

    /// Single window covering the whole series
    pub fn full_window(&self) -> Window<'_> {
        Window::at(self, 0, self.n_steps())
    }

    /// Shorthand for [`extract_windows`]
    pub fn windows(&self, window_size: usize) -> Result<Windows<'_>> {
        extract_windows(self, window_size)
    }
}
