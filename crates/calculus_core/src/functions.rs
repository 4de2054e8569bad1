//! Free-standing elementary functions.
//!
//! Each accepts either a [`Scalar`] or a raw `f64` and forwards to the
//! matching `Scalar` method, so `sin(0.5) == Scalar::new(0.5).sin()`.

use crate::scalar::Scalar;

macro_rules! forward_unary {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(x: impl Into<Scalar>) -> f64 {
                x.into().$name()
            }
        )*
    };
}

forward_unary!(
    sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, exp, log, log10, sqrt, cbrt, abs,
);

pub fn pow(x: impl Into<Scalar>, n: f64) -> f64 {
    x.into().pow(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_wrapped_arguments_agree() {
        let x = 0.75;
        let s = Scalar::new(x);
        assert_eq!(sin(x), sin(s));
        assert_eq!(cos(x), s.cos());
        assert_eq!(tan(x), s.tan());
        assert_eq!(asin(x), s.asin());
        assert_eq!(acos(x), s.acos());
        assert_eq!(atan(x), s.atan());
        assert_eq!(sinh(x), s.sinh());
        assert_eq!(cosh(x), s.cosh());
        assert_eq!(tanh(x), s.tanh());
        assert_eq!(exp(x), s.exp());
        assert_eq!(log(x), s.log());
        assert_eq!(log10(x), s.log10());
        assert_eq!(sqrt(x), s.sqrt());
        assert_eq!(cbrt(x), s.cbrt());
        assert_eq!(abs(-x), x);
        assert_eq!(pow(s, 2.0), x * x);
    }

    #[test]
    fn results_of_arithmetic_can_be_passed_directly() {
        let sum = Scalar::new(1.0) + Scalar::new(3.0);
        assert_eq!(sqrt(sum), 2.0);
        assert_eq!(log10(Scalar::new(10.0) * 10.0), 2.0);
    }
}
