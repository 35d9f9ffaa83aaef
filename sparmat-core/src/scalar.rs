//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! as matrix elements. Real and complex elements share the same bound;
//! norms reduce over the magnitude, which is the absolute value for real
//! types and the modulus for complex ones.

use core::ops::{AddAssign, Mul};

use num_complex::Complex;
use num_traits::Zero;

/// Trait for types that can be stored as matrix elements
///
/// Elements must be cheap to copy, comparable for equality, and support the
/// additive and multiplicative structure the norms and the matrix-vector
/// product rely on. The additive identity comes from [`Zero`].
pub trait Scalar: Copy + PartialEq + AddAssign + Mul<Output = Self> + Zero {
    /// Convert from f64 for generic construction
    ///
    /// Used by the exchange-file reader, where the element type is not
    /// known while parsing.
    fn from_f64(value: f64) -> Self;

    /// Magnitude as f64: absolute value for real types, modulus for
    /// complex ones
    fn magnitude(self) -> f64;
}

impl Scalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn magnitude(self) -> f64 {
        (self as f64).abs()
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Scalar for i32 {
    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn magnitude(self) -> f64 {
        (self as f64).abs()
    }
}

impl Scalar for i64 {
    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn magnitude(self) -> f64 {
        (self as f64).abs()
    }
}

impl Scalar for u32 {
    fn from_f64(value: f64) -> Self {
        value as u32
    }

    fn magnitude(self) -> f64 {
        self as f64
    }
}

impl Scalar for u64 {
    fn from_f64(value: f64) -> Self {
        value as u64
    }

    fn magnitude(self) -> f64 {
        self as f64
    }
}

impl Scalar for Complex<f32> {
    fn from_f64(value: f64) -> Self {
        Complex::new(value as f32, 0.0)
    }

    fn magnitude(self) -> f64 {
        self.norm() as f64
    }
}

impl Scalar for Complex<f64> {
    fn from_f64(value: f64) -> Self {
        Complex::new(value, 0.0)
    }

    fn magnitude(self) -> f64 {
        self.norm()
    }
}
