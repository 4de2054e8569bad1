//! Vec3 wrapper.

use calculus_core::Vec3;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct WasmVec3 {
    inner: Vec3,
}

impl From<Vec3> for WasmVec3 {
    fn from(inner: Vec3) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl WasmVec3 {
    /// Missing components default to 0.
    #[wasm_bindgen(constructor)]
    pub fn new(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> WasmVec3 {
        console_error_panic_hook::set_once();
        Vec3::new(x.unwrap_or(0.0), y.unwrap_or(0.0), z.unwrap_or(0.0)).into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    pub fn add(&self, other: &WasmVec3) -> WasmVec3 {
        self.inner.add(other.inner).into()
    }

    pub fn subtract(&self, other: &WasmVec3) -> WasmVec3 {
        self.inner.subtract(other.inner).into()
    }

    pub fn scale(&self, s: f64) -> WasmVec3 {
        self.inner.scale(s).into()
    }

    pub fn dot(&self, other: &WasmVec3) -> f64 {
        self.inner.dot(other.inner)
    }

    pub fn cross(&self, other: &WasmVec3) -> WasmVec3 {
        self.inner.cross(other.inner).into()
    }

    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    pub fn normalize(&self) -> WasmVec3 {
        self.inner.normalize().into()
    }

    pub fn distance(&self, other: &WasmVec3) -> f64 {
        self.inner.distance(other.inner)
    }

    /// Components as a `Float64Array`-compatible vector `[x, y, z]`.
    pub fn to_array(&self) -> Vec<f64> {
        let [x, y, z]: [f64; 3] = self.inner.into();
        vec![x, y, z]
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}
