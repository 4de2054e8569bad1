//! Read-only access to the named constants table.

use calculus_core::CONSTANTS;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// The whole table as a plain JS object keyed by constant name.
#[wasm_bindgen]
pub fn constants() -> Result<JsValue, JsValue> {
    to_value(&CONSTANTS).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Single constant by name, `undefined` if the name is unknown.
#[wasm_bindgen]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name)
}
