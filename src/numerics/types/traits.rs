// src/numerics/types/traits.rs
// Scalar trait shared by the numerics types.

use core::fmt;

/// FloatingPoint is the scalar bound for the numerics types.
///
/// Everything arithmetic (sqrt, acos, zero, one, NaN queries) comes from
/// `num_traits::Float`. The additions move values to and from `f64` for the
/// steps that mix in double-precision constants.
pub trait FloatingPoint:
    num_traits::Float + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Narrow a double-precision value into this type.
    fn from_f64(value: f64) -> Self;

    /// Widen this value to double precision. Exact for f32 and f64.
    fn widen(self) -> f64;
}

impl FloatingPoint for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl FloatingPoint for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}
