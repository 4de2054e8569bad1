//! The `calculus_core` crate is the numeric engine behind the calculus bindings.
//! Every type is a plain value type; nothing here holds shared mutable state.
//!
//! Key components:
//! - **Scalar**: a wrapped `f64` with arithmetic operators and elementary functions.
//! - **Vec3**: a 3-component vector with dot/cross products, norms and distances.
//! - **Constants**: a read-only table of named mathematical and physical constants.
//! - **Solvers**: definite integration by the composite Simpson rule.
//! - **Traits**: `Real` (float type abstraction used by the solvers).

pub mod constants;
pub mod error;
pub mod functions;
pub mod scalar;
pub mod solvers;
pub mod traits;
pub mod vec3;

pub use constants::{Constants, CONSTANTS};
pub use error::{CalculusError, CalculusResult};
pub use scalar::Scalar;
pub use solvers::{subintervals_from_f64, IntegrationSettings, Solver};
pub use vec3::Vec3;
