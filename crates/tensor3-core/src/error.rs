use crate::shape::{Position, Shape};

/// Contract violations reported by tensor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    #[error("shape {shape} requires {expected} elements, got {got}")]
    LengthMismatch {
        shape: Shape,
        expected: usize,
        got: usize,
    },

    #[error("volume of shape {shape} overflows usize")]
    VolumeOverflow { shape: Shape },

    #[error("cannot reshape {from} into {to}: volumes differ")]
    InvalidReshape { from: Shape, to: Shape },

    #[error("position {position} is out of bounds for shape {shape}")]
    OutOfBounds { position: Position, shape: Shape },
}
