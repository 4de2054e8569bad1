//! Browser-side tests for the calculus WASM bindings.
//!
//! Run with `wasm-pack test --headless --firefox crates/calculus_wasm`.

#![cfg(target_arch = "wasm32")]

use calculus_wasm::{constant, constants, integrate, integrate_with, WasmScalar, WasmVec3};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js_fn(body: &str) -> Function {
    Function::new_with_args("x", body)
}

#[wasm_bindgen_test]
fn integrates_quadratic_exactly() {
    let value = integrate(&js_fn("return x * x;"), 0.0, 3.0, 6.0).expect("integral should compute");
    assert_eq!(value, 9.0);
}

#[wasm_bindgen_test]
fn odd_count_is_rejected_before_calling_host() {
    let counter = js_fn("globalThis.__calls = (globalThis.__calls || 0) + 1; return x;");
    Reflect::set(&js_sys::global(), &"__calls".into(), &JsValue::from_f64(0.0)).unwrap();

    let err = integrate(&counter, 0.0, 1.0, 3.0).expect_err("odd n should fail");
    let message = err.as_string().unwrap_or_default();
    assert!(message.contains("even"), "unexpected message: {message}");

    let calls = Reflect::get(&js_sys::global(), &"__calls".into()).unwrap();
    assert_eq!(calls.as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn fractional_count_is_rejected_not_truncated() {
    let counter = js_fn("globalThis.__frac_calls = (globalThis.__frac_calls || 0) + 1; return x;");
    Reflect::set(&js_sys::global(), &"__frac_calls".into(), &JsValue::from_f64(0.0)).unwrap();

    let err = integrate(&counter, 0.0, 1.0, 2.5).expect_err("2.5 should fail");
    let message = err.as_string().unwrap_or_default();
    assert!(message.starts_with("Integration failed: Invalid argument"), "unexpected message: {message}");
    assert!(message.contains("whole number"), "unexpected message: {message}");

    let err = integrate(&counter, 0.0, 1.0, f64::NAN).expect_err("NaN should fail");
    assert!(err.as_string().unwrap_or_default().contains("whole number"));

    let settings = Object::new();
    Reflect::set(&settings, &"subintervals".into(), &JsValue::from_f64(2.5)).unwrap();
    let err = integrate_with(&counter, 0.0, 1.0, settings.into()).expect_err("2.5 should fail");
    assert!(err.as_string().unwrap_or_default().contains("whole number"));

    let calls = Reflect::get(&js_sys::global(), &"__frac_calls".into()).unwrap();
    assert_eq!(calls.as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn host_exception_is_surfaced() {
    let err = integrate(&js_fn("throw new Error('boom');"), 0.0, 1.0, 2.0)
        .expect_err("thrown error should propagate");
    assert!(err.is_instance_of::<js_sys::Error>());
}

#[wasm_bindgen_test]
fn non_numeric_return_is_an_error() {
    let err = integrate(&js_fn("return 'nope';"), 0.0, 1.0, 2.0).expect_err("should fail");
    let message = err.as_string().unwrap_or_default();
    assert!(message.contains("non-numeric"), "unexpected message: {message}");
}

#[wasm_bindgen_test]
fn settings_object_controls_subintervals() {
    let settings = Object::new();
    Reflect::set(&settings, &"subintervals".into(), &JsValue::from_f64(4.0)).unwrap();
    let value = integrate_with(&js_fn("return x;"), 0.0, 2.0, settings.into())
        .expect("integral should compute");
    assert_eq!(value, 2.0);

    let value = integrate_with(&js_fn("return 1;"), 0.0, 1.0, JsValue::UNDEFINED)
        .expect("default settings should compute");
    assert!((value - 1.0).abs() < 1e-12);
}

#[wasm_bindgen_test]
fn constants_table_is_exported() {
    assert_eq!(constant("pi"), Some(std::f64::consts::PI));
    assert_eq!(constant("unknown"), None);

    let table = constants().expect("constants should serialize");
    let c = Reflect::get(&table, &"speed_of_light".into()).unwrap();
    assert_eq!(c.as_f64(), Some(299_792_458.0));
}

#[wasm_bindgen_test]
fn scalar_and_vector_wrappers() {
    let s = WasmScalar::new(Some(4.0));
    assert_eq!(s.sqrt(), 2.0);
    assert_eq!(s.add_f64(1.0).value(), 5.0);

    let v = WasmVec3::new(Some(3.0), Some(4.0), None);
    assert_eq!(v.magnitude(), 5.0);
}
