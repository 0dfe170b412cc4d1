//! Shape manipulation: reshape.
//!
//! Reshaping only reinterprets the row-major buffer; flat index `i` of the
//! source is flat index `i` of the result.

use crate::error::TensorError;
use crate::shape::Shape;
use crate::tensor::Tensor3;
use crate::Result;

impl Tensor3 {
    /// Reinterpret this tensor's data under `new_shape`, copying the buffer.
    ///
    /// Fails when `new_shape.volume()` differs from the current volume.
    pub fn reshape(&self, new_shape: Shape) -> Result<Tensor3> {
        check_reshape(self.shape(), &new_shape)?;
        Ok(Tensor3::from_parts(new_shape, self.as_slice().to_vec()))
    }

    /// Reinterpret this tensor's data under `new_shape` without copying.
    pub fn into_reshape(self, new_shape: Shape) -> Result<Tensor3> {
        check_reshape(self.shape(), &new_shape)?;
        let (_, values) = self.into_parts();
        Ok(Tensor3::from_parts(new_shape, values))
    }
}

fn check_reshape(from: &Shape, to: &Shape) -> Result<()> {
    if from.checked_volume() != to.checked_volume() {
        return Err(TensorError::InvalidReshape {
            from: *from,
            to: *to,
        });
    }
    tracing::trace!(%from, %to, "reshape");
    Ok(())
}
