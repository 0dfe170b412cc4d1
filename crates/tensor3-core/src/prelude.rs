//! Convenience re-exports for common tensor3-core types.
//!
//! ```rust
//! use tensor3_core::prelude::*;
//! ```

pub use crate::Position;
pub use crate::Result;
pub use crate::Scalar;
pub use crate::Shape;
pub use crate::Tensor3;
pub use crate::TensorError;
