//! Tensor operations: elementwise, manipulation, reduction, arithmetic.
//!
//! All operations return new tensors (functional style); only
//! [`Tensor3::set`](crate::Tensor3::set) mutates in place.

pub mod arithmetic;
pub mod elementwise;
pub mod manipulation;
pub mod reduction;

/// Buffers at least this long are processed with rayon when the
/// `parallel` feature is enabled.
pub const PAR_THRESHOLD: usize = 8192;
