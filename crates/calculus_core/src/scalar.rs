//! A single real number with elementary function support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Wrapped `f64`.
///
/// Arithmetic returns a new `Scalar` holding the plain IEEE-754 result, so
/// `Scalar::new(1.0) / 0.0` is infinite rather than an error. The unary
/// functions return raw `f64` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Scalar {
    pub value: f64,
}

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn sin(self) -> f64 {
        self.value.sin()
    }

    pub fn cos(self) -> f64 {
        self.value.cos()
    }

    pub fn tan(self) -> f64 {
        self.value.tan()
    }

    /// NaN outside `[-1, 1]`.
    pub fn asin(self) -> f64 {
        self.value.asin()
    }

    /// NaN outside `[-1, 1]`.
    pub fn acos(self) -> f64 {
        self.value.acos()
    }

    pub fn atan(self) -> f64 {
        self.value.atan()
    }

    pub fn sinh(self) -> f64 {
        self.value.sinh()
    }

    pub fn cosh(self) -> f64 {
        self.value.cosh()
    }

    pub fn tanh(self) -> f64 {
        self.value.tanh()
    }

    pub fn exp(self) -> f64 {
        self.value.exp()
    }

    /// Natural logarithm. `-inf` at zero, NaN for negative values.
    pub fn log(self) -> f64 {
        self.value.ln()
    }

    pub fn log10(self) -> f64 {
        self.value.log10()
    }

    pub fn sqrt(self) -> f64 {
        self.value.sqrt()
    }

    pub fn cbrt(self) -> f64 {
        self.value.cbrt()
    }

    pub fn abs(self) -> f64 {
        self.value.abs()
    }

    pub fn pow(self, exponent: f64) -> f64 {
        self.value.powf(exponent)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Scalar> for f64 {
    fn from(scalar: Scalar) -> Self {
        scalar.value
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.value)
    }
}

impl Neg for Scalar {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

// Each operator is provided for `Scalar op Scalar`, `Scalar op f64` and `f64 op Scalar`.
macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                Scalar::new(self.value $op rhs.value)
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                Scalar::new(self.value $op rhs)
            }
        }

        impl $trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                Scalar::new(self $op rhs.value)
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);
impl_scalar_op!(Div, div, /);
