//! # tensor3-core
//!
//! Dense three-dimensional tensor for numeric pipelines such as the feature
//! maps passed between layers of an inference engine.
//!
//! Provides the foundational `Tensor3` type with:
//! - A single contiguous row-major buffer (`z * height * width + y * width + x`)
//! - Bounds-checked coordinate access through [`Position`]
//! - Shape-preserving elementwise transforms and O(1) reshape
//! - Min/max search, summation and same-shape arithmetic
//!
//! ```
//! use tensor3_core::{Position, Shape, Tensor3};
//!
//! let t = Tensor3::from_vec(Shape::new(1, 2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(t.get_zyx(0, 1, 1).unwrap(), 4.0);
//! assert_eq!(t.max_position(), Some(Position::new(0, 1, 1)));
//!
//! let doubled = &t * 2.0;
//! assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//! ```

pub mod error;
pub mod ops;
pub mod prelude;
pub mod scalar;
pub mod shape;
pub mod tensor;

pub use error::TensorError;
pub use scalar::Scalar;
pub use shape::{Position, Shape};
pub use tensor::Tensor3;

pub type Result<T> = std::result::Result<T, TensorError>;
