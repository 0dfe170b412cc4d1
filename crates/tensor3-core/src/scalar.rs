//! Element type of every tensor in the crate.
//!
//! `f32` by default; the `f64` feature widens it to double precision.

#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

#[cfg(feature = "f64")]
pub type Scalar = f64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_width() {
        #[cfg(not(feature = "f64"))]
        assert_eq!(std::mem::size_of::<Scalar>(), 4);
        #[cfg(feature = "f64")]
        assert_eq!(std::mem::size_of::<Scalar>(), 8);
    }
}
