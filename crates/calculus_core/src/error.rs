use thiserror::Error;

/// Failures reported by the engine.
///
/// Arithmetic never fails: NaN and infinities propagate as ordinary values.
/// The only rejected input is a bad subinterval count handed to the integrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculusError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CalculusResult<T> = Result<T, CalculusError>;
