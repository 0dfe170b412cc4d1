//! Reduction operations: min/max search, sum, mean.

use crate::scalar::Scalar;
use crate::shape::Position;
use crate::tensor::Tensor3;

impl Tensor3 {
    /// Positions of the minimum and maximum elements, as `(min, max)`.
    ///
    /// Scans once in row-major order. Ties keep the first occurrence. NaN
    /// elements never replace a running extreme; if every element is NaN
    /// both positions are the first element. Returns `None` for an empty
    /// tensor.
    pub fn min_max_positions(&self) -> Option<(Position, Position)> {
        let (min_offset, max_offset) = min_max_offsets(self.as_slice())?;
        let shape = self.shape();
        Some((shape.position_of(min_offset)?, shape.position_of(max_offset)?))
    }

    /// Minimum and maximum element values, as `(min, max)`.
    pub fn min_max_values(&self) -> Option<(Scalar, Scalar)> {
        let data = self.as_slice();
        min_max_offsets(data).map(|(lo, hi)| (data[lo], data[hi]))
    }

    /// Position of the first maximum element.
    pub fn max_position(&self) -> Option<Position> {
        self.min_max_positions().map(|(_, max)| max)
    }

    /// Position of the first minimum element.
    pub fn min_position(&self) -> Option<Position> {
        self.min_max_positions().map(|(min, _)| min)
    }

    /// Largest element.
    pub fn max_value(&self) -> Option<Scalar> {
        self.min_max_values().map(|(_, max)| max)
    }

    /// Smallest element.
    pub fn min_value(&self) -> Option<Scalar> {
        self.min_max_values().map(|(min, _)| min)
    }

    /// Sum of all elements.
    ///
    /// Accumulates sequentially from the first to the last element in
    /// row-major order, so the result is bit-reproducible for a given
    /// buffer. An empty tensor sums to zero.
    pub fn sum_all(&self) -> Scalar {
        self.iter().fold(0.0, |acc, &v| acc + v)
    }

    /// Arithmetic mean of all elements, `None` when empty.
    pub fn mean(&self) -> Option<Scalar> {
        if self.is_empty() {
            return None;
        }
        Some(self.sum_all() / self.numel() as Scalar)
    }
}

/// Flat offsets of the first minimum and first maximum in `data`.
fn min_max_offsets(data: &[Scalar]) -> Option<(usize, usize)> {
    if data.is_empty() {
        tracing::debug!("min/max search on an empty tensor");
        return None;
    }
    let start = data.iter().position(|v| !v.is_nan()).unwrap_or(0);
    let (mut min_idx, mut max_idx) = (start, start);
    for (i, &v) in data.iter().enumerate().skip(start + 1) {
        if v > data[max_idx] {
            max_idx = i;
        }
        if v < data[min_idx] {
            min_idx = i;
        }
    }
    Some((min_idx, max_idx))
}
