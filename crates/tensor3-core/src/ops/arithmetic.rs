//! Same-shape tensor arithmetic and operator overloads.
//!
//! Binary operations never broadcast: operands must have identical shapes.

use std::ops::{Add, Div, Mul, Sub};

use crate::ops::elementwise::binary_op;
use crate::scalar::Scalar;
use crate::tensor::Tensor3;
use crate::Result;

impl Tensor3 {
    /// Element-wise addition: self + other.
    pub fn add(&self, other: &Tensor3) -> Result<Tensor3> {
        binary_op(self, other, |a, b| a + b)
    }

    /// Element-wise subtraction, computed as `self + other * -1`.
    pub fn sub(&self, other: &Tensor3) -> Result<Tensor3> {
        self.add(&other.mul_scalar(-1.0))
    }

    /// Element-wise absolute difference: |self - other|.
    pub fn abs_diff(&self, other: &Tensor3) -> Result<Tensor3> {
        Ok(self.sub(other)?.abs())
    }
}

// Operator overloads. Tensor-tensor operators panic on shape mismatch;
// use the named methods for a `Result`.

impl Add for &Tensor3 {
    type Output = Tensor3;
    fn add(self, rhs: &Tensor3) -> Tensor3 {
        Tensor3::add(self, rhs).unwrap_or_else(|e| panic!("tensor addition failed: {e}"))
    }
}

impl Add for Tensor3 {
    type Output = Tensor3;
    fn add(self, rhs: Tensor3) -> Tensor3 {
        &self + &rhs
    }
}

impl Sub for &Tensor3 {
    type Output = Tensor3;
    fn sub(self, rhs: &Tensor3) -> Tensor3 {
        Tensor3::sub(self, rhs).unwrap_or_else(|e| panic!("tensor subtraction failed: {e}"))
    }
}

impl Sub for Tensor3 {
    type Output = Tensor3;
    fn sub(self, rhs: Tensor3) -> Tensor3 {
        &self - &rhs
    }
}

impl Mul<Scalar> for &Tensor3 {
    type Output = Tensor3;
    fn mul(self, factor: Scalar) -> Tensor3 {
        self.mul_scalar(factor)
    }
}

impl Mul<Scalar> for Tensor3 {
    type Output = Tensor3;
    fn mul(self, factor: Scalar) -> Tensor3 {
        self.mul_scalar(factor)
    }
}

impl Div<Scalar> for &Tensor3 {
    type Output = Tensor3;
    fn div(self, divisor: Scalar) -> Tensor3 {
        self.div_scalar(divisor)
    }
}

impl Div<Scalar> for Tensor3 {
    type Output = Tensor3;
    fn div(self, divisor: Scalar) -> Tensor3 {
        self.div_scalar(divisor)
    }
}
