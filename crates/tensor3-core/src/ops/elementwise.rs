//! Shape-preserving elementwise operations.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::Tensor3;
use crate::Result;

impl Tensor3 {
    /// Apply `f` to every element, producing a tensor of the same shape.
    ///
    /// Each element is visited exactly once, in row-major order, on the
    /// calling thread. `f` is expected to be pure.
    pub fn transform(&self, f: impl Fn(Scalar) -> Scalar) -> Tensor3 {
        let values = self.iter().map(|&v| f(v)).collect();
        Tensor3::from_parts(*self.shape(), values)
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Tensor3 {
        unary_op(self, Scalar::abs)
    }

    /// Multiply every element by `factor`.
    pub fn mul_scalar(&self, factor: Scalar) -> Tensor3 {
        unary_op(self, move |v| factor * v)
    }

    /// Divide every element by `divisor`, computed as `self * (1 / divisor)`.
    ///
    /// A zero divisor is not an error: the result holds IEEE infinities
    /// (or NaN where the element is zero).
    pub fn div_scalar(&self, divisor: Scalar) -> Tensor3 {
        if divisor == 0.0 {
            tracing::debug!(shape = %self.shape(), "dividing tensor by zero");
        }
        self.mul_scalar(1.0 / divisor)
    }
}

/// Apply a pure built-in unary kernel, in parallel for large buffers.
pub(crate) fn unary_op(a: &Tensor3, op: impl Fn(Scalar) -> Scalar + Sync + Send) -> Tensor3 {
    let data = a.as_slice();
    #[cfg(feature = "parallel")]
    let values: Vec<Scalar> = if data.len() >= super::PAR_THRESHOLD {
        data.par_iter().map(|&v| op(v)).collect()
    } else {
        data.iter().map(|&v| op(v)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let values: Vec<Scalar> = data.iter().map(|&v| op(v)).collect();
    Tensor3::from_parts(*a.shape(), values)
}

/// Combine two same-shape tensors element by element.
pub(crate) fn binary_op(
    a: &Tensor3,
    b: &Tensor3,
    op: impl Fn(Scalar, Scalar) -> Scalar + Sync + Send,
) -> Result<Tensor3> {
    if a.shape() != b.shape() {
        return Err(TensorError::ShapeMismatch {
            expected: *a.shape(),
            got: *b.shape(),
        });
    }
    let (a_data, b_data) = (a.as_slice(), b.as_slice());
    #[cfg(feature = "parallel")]
    let values: Vec<Scalar> = if a_data.len() >= super::PAR_THRESHOLD {
        a_data
            .par_iter()
            .zip(b_data.par_iter())
            .map(|(&x, &y)| op(x, y))
            .collect()
    } else {
        a_data.iter().zip(b_data).map(|(&x, &y)| op(x, y)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let values: Vec<Scalar> = a_data.iter().zip(b_data).map(|(&x, &y)| op(x, y)).collect();
    Ok(Tensor3::from_parts(*a.shape(), values))
}
