use crate::error::{CalculusError, CalculusResult};
use crate::traits::Real;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest magnitude at which every whole `f64` is exactly representable (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Reusable quadrature configuration. Missing fields deserialize to the defaults.
///
/// The default of 1000 subintervals is this library's own choice and is not
/// tied to any accuracy target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    /// Number of subintervals. Must be positive and even.
    pub subintervals: i64,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self { subintervals: 1000 }
    }
}

/// Stateless namespace for the numerical integrators.
pub struct Solver;

impl Solver {
    /// Approximates the integral of `f` over `[a, b]` with the composite Simpson rule
    /// on `n` equal subintervals.
    ///
    /// `a > b` gives the negatively oriented integral. `n` must be positive and even;
    /// otherwise `InvalidArgument` is returned before `f` is called.
    ///
    /// `f` is called exactly `n + 1` times, at `a, a + h, a + 2h, ..., b` in that order.
    /// The sum is accumulated as `f(a) + f(b)` followed by the weighted interior terms
    /// in index order. There is no error estimate and no step refinement.
    pub fn integrate<T, F>(mut f: F, a: T, b: T, n: i64) -> CalculusResult<T>
    where
        T: Real,
        F: FnMut(T) -> T,
        i64: AsPrimitive<T>,
        usize: AsPrimitive<T>,
    {
        let steps = validate_subintervals(n)?;

        let one = T::one();
        let two = one + one;
        let three = two + one;
        let four = two + two;

        let n_real: T = n.as_();
        let h = (b - a) / n_real;

        let fa = f(a);

        // Interior nodes a + h*i for i = 1..n-1, odd weighted 4, even weighted 2.
        // Held until f(b) is known so the sum starts from f(a) + f(b).
        let mut interior = Vec::with_capacity(steps - 1);
        for i in 1..steps {
            let weight = if i % 2 == 1 { four } else { two };
            let index: T = i.as_();
            interior.push(weight * f(a + h * index));
        }

        let fb = f(b);

        let mut s = fa + fb;
        for term in interior {
            s = s + term;
        }

        let result = s * h / three;
        debug!(a = ?a, b = ?b, n, result = ?result, "simpson integration finished");
        Ok(result)
    }

    /// Same as [`Solver::integrate`] with the subinterval count taken from `settings`.
    pub fn integrate_with<T, F>(
        f: F,
        a: T,
        b: T,
        settings: &IntegrationSettings,
    ) -> CalculusResult<T>
    where
        T: Real,
        F: FnMut(T) -> T,
        i64: AsPrimitive<T>,
        usize: AsPrimitive<T>,
    {
        Self::integrate(f, a, b, settings.subintervals)
    }
}

/// Converts a subinterval count received as a double (as hosts with a single
/// number type pass it) into an integer count.
///
/// NaN, infinities, fractional values and magnitudes beyond 2^53 are rejected
/// rather than truncated. Sign and parity are left to [`Solver::integrate`].
pub fn subintervals_from_f64(n: f64) -> CalculusResult<i64> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_EXACT_INTEGER {
        debug!(n, "rejected non-integral subinterval count");
        return Err(CalculusError::InvalidArgument(format!(
            "subinterval count must be a whole number, got {n}"
        )));
    }
    Ok(n as i64)
}

/// Checks that `n` is a positive even count and returns it as a loop bound.
fn validate_subintervals(n: i64) -> CalculusResult<usize> {
    if n <= 0 {
        debug!(n, "rejected non-positive subinterval count");
        return Err(CalculusError::InvalidArgument(format!(
            "subinterval count must be positive, got {n}"
        )));
    }
    if n % 2 != 0 {
        debug!(n, "rejected odd subinterval count");
        return Err(CalculusError::InvalidArgument(format!(
            "subinterval count must be even, got {n}"
        )));
    }
    usize::try_from(n).map_err(|_| {
        CalculusError::InvalidArgument(format!("subinterval count {n} is too large"))
    })
}
