//! WASM bridge for the calculus core library.
//!
//! Each submodule wraps one core component. Core errors surface as string
//! `JsValue`s; panics are routed to the browser console.

mod constants;
mod scalar;
mod solver;
mod vec3;

pub use constants::{constant, constants};
pub use scalar::WasmScalar;
pub use solver::{integrate, integrate_with};
pub use vec3::WasmVec3;
