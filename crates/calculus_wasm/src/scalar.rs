//! Scalar wrapper and free elementary functions.

use calculus_core::functions;
use calculus_core::Scalar;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct WasmScalar {
    inner: Scalar,
}

impl From<Scalar> for WasmScalar {
    fn from(inner: Scalar) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl WasmScalar {
    /// Missing values default to 0.
    #[wasm_bindgen(constructor)]
    pub fn new(value: Option<f64>) -> WasmScalar {
        console_error_panic_hook::set_once();
        Scalar::new(value.unwrap_or(0.0)).into()
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    pub fn add(&self, other: &WasmScalar) -> WasmScalar {
        (self.inner + other.inner).into()
    }

    pub fn sub(&self, other: &WasmScalar) -> WasmScalar {
        (self.inner - other.inner).into()
    }

    pub fn mul(&self, other: &WasmScalar) -> WasmScalar {
        (self.inner * other.inner).into()
    }

    pub fn div(&self, other: &WasmScalar) -> WasmScalar {
        (self.inner / other.inner).into()
    }

    pub fn add_f64(&self, other: f64) -> WasmScalar {
        (self.inner + other).into()
    }

    pub fn sub_f64(&self, other: f64) -> WasmScalar {
        (self.inner - other).into()
    }

    pub fn mul_f64(&self, other: f64) -> WasmScalar {
        (self.inner * other).into()
    }

    pub fn div_f64(&self, other: f64) -> WasmScalar {
        (self.inner / other).into()
    }

    pub fn sin(&self) -> f64 {
        self.inner.sin()
    }

    pub fn cos(&self) -> f64 {
        self.inner.cos()
    }

    pub fn tan(&self) -> f64 {
        self.inner.tan()
    }

    pub fn asin(&self) -> f64 {
        self.inner.asin()
    }

    pub fn acos(&self) -> f64 {
        self.inner.acos()
    }

    pub fn atan(&self) -> f64 {
        self.inner.atan()
    }

    pub fn sinh(&self) -> f64 {
        self.inner.sinh()
    }

    pub fn cosh(&self) -> f64 {
        self.inner.cosh()
    }

    pub fn tanh(&self) -> f64 {
        self.inner.tanh()
    }

    pub fn exp(&self) -> f64 {
        self.inner.exp()
    }

    pub fn log(&self) -> f64 {
        self.inner.log()
    }

    pub fn log10(&self) -> f64 {
        self.inner.log10()
    }

    pub fn sqrt(&self) -> f64 {
        self.inner.sqrt()
    }

    pub fn cbrt(&self) -> f64 {
        self.inner.cbrt()
    }

    pub fn abs(&self) -> f64 {
        self.inner.abs()
    }

    pub fn pow(&self, exponent: f64) -> f64 {
        self.inner.pow(exponent)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

// Free functions mirror the methods for hosts that hold raw numbers.

#[wasm_bindgen]
pub fn sin(x: f64) -> f64 {
    functions::sin(x)
}

#[wasm_bindgen]
pub fn cos(x: f64) -> f64 {
    functions::cos(x)
}

#[wasm_bindgen]
pub fn tan(x: f64) -> f64 {
    functions::tan(x)
}

#[wasm_bindgen]
pub fn asin(x: f64) -> f64 {
    functions::asin(x)
}

#[wasm_bindgen]
pub fn acos(x: f64) -> f64 {
    functions::acos(x)
}

#[wasm_bindgen]
pub fn atan(x: f64) -> f64 {
    functions::atan(x)
}

#[wasm_bindgen]
pub fn sinh(x: f64) -> f64 {
    functions::sinh(x)
}

#[wasm_bindgen]
pub fn cosh(x: f64) -> f64 {
    functions::cosh(x)
}

#[wasm_bindgen]
pub fn tanh(x: f64) -> f64 {
    functions::tanh(x)
}

#[wasm_bindgen]
pub fn exp(x: f64) -> f64 {
    functions::exp(x)
}

#[wasm_bindgen]
pub fn log(x: f64) -> f64 {
    functions::log(x)
}

#[wasm_bindgen]
pub fn log10(x: f64) -> f64 {
    functions::log10(x)
}

#[wasm_bindgen]
pub fn sqrt(x: f64) -> f64 {
    functions::sqrt(x)
}

#[wasm_bindgen]
pub fn cbrt(x: f64) -> f64 {
    functions::cbrt(x)
}

#[wasm_bindgen]
pub fn abs(x: f64) -> f64 {
    functions::abs(x)
}

#[wasm_bindgen]
pub fn pow(x: f64, n: f64) -> f64 {
    functions::pow(x, n)
}
