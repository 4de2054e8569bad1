use num_traits::Float;
use std::fmt::Debug;

/// A trait for float types the solvers can integrate over.
/// Must support IEEE-754 arithmetic and debug printing.
pub trait Real: Float + Debug + 'static {}

impl<T: Float + Debug + 'static> Real for T {}
