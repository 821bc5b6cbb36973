//! Dense multivariate time series input
//!
//! Storage is a column-major `nalgebra::DMatrix<f64>`: rows are time steps,
//! columns are channels. Column-major layout keeps every channel's slice of a
//! window contiguous, which the explicit-loop kernel relies on.

use nalgebra::DMatrix;
use rolling_core::{Error, Result};

/// Immutable `(T, C)` matrix of observations
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesMatrix {
    data: DMatrix<f64>,
}

impl TimeSeriesMatrix {
    /// Build from a sequence of rows, one per time step
    ///
    /// Every row must have the same, non-zero, number of columns.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_steps = rows.len();
        let n_channels = rows.first().map_or(0, |r| r.as_ref().len());
        if n_steps == 0 || n_channels == 0 {
            return Err(Error::empty_matrix(n_steps, n_channels));
        }

        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != n_channels {
                return Err(Error::ragged_row(i, n_channels, len));
            }
        }

        let data = DMatrix::from_fn(n_steps, n_channels, |r, c| rows[r].as_ref()[c]);
        Ok(Self { data })
    }

    /// Build from one slice per channel
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self> {
        let n_channels = columns.len();
        let n_steps = columns.first().map_or(0, |c| c.as_ref().len());
        if n_steps == 0 || n_channels == 0 {
            return Err(Error::empty_matrix(n_steps, n_channels));
        }

        for (i, column) in columns.iter().enumerate() {
            let len = column.as_ref().len();
            if len != n_steps {
                return Err(Error::ShapeMismatch(format!(
                    "channel {i} has {len} samples, expected {n_steps}"
                )));
            }
        }

        let data = DMatrix::from_fn(n_steps, n_channels, |r, c| columns[c].as_ref()[r]);
        Ok(Self { data })
    }

    /// Build from a flat row-major buffer
    pub fn from_row_major(n_steps: usize, n_channels: usize, values: &[f64]) -> Result<Self> {
        if n_steps == 0 || n_channels == 0 {
            return Err(Error::empty_matrix(n_steps, n_channels));
        }
        let expected = n_steps.checked_mul(n_channels).ok_or_else(|| {
            Error::ShapeMismatch(format!("{n_steps}x{n_channels} overflows usize"))
        })?;
        if values.len() != expected {
            return Err(Error::size_mismatch(expected, values.len(), "row-major buffer"));
        }

        Ok(Self {
            data: DMatrix::from_row_slice(n_steps, n_channels, values),
        })
    }

    /// Storage already known to be non-empty
    pub(crate) fn from_storage(data: DMatrix<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// Wrap an existing nalgebra matrix (rows = time steps)
    pub fn from_dmatrix(data: DMatrix<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(Error::empty_matrix(data.nrows(), data.ncols()));
        }
        Ok(Self { data })
    }

    /// Number of time steps (`T`)
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.data.nrows()
    }

    /// Number of channels (`C`)
    #[inline]
    pub fn n_channels(&self) -> usize {
        self.data.ncols()
    }

    /// `(T, C)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Value at time step `row`, channel `channel`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn value(&self, row: usize, channel: usize) -> f64 {
        self.data[(row, channel)]
    }

    /// Full history of one channel
    pub fn channel(&self, channel: usize) -> Result<&[f64]> {
        if channel >= self.n_channels() {
            return Err(Error::channel_out_of_range(channel, self.n_channels()));
        }
        Ok(self.channel_range(channel, 0, self.n_steps()))
    }

    /// Underlying nalgebra storage
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Contiguous rows `[start, start + len)` of one channel
    #[inline]
    pub(crate) fn channel_range(&self, channel: usize, start: usize, len: usize) -> &[f64] {
        let offset = channel * self.n_steps() + start;
        &self.data.as_slice()[offset..offset + len]
    }
}
