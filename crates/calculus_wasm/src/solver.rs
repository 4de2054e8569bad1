//! Simpson integration over a host-supplied JS callback.

use calculus_core::{subintervals_from_f64, CalculusError, IntegrationSettings, Solver};
use js_sys::Function;
use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

/// Adapts a JS function to the `f64 -> f64` shape the core solver calls.
///
/// The first thrown exception or non-numeric return is kept and every later
/// call short-circuits to NaN without re-entering JS.
struct JsIntegrand<'a> {
    func: &'a Function,
    error: Option<JsValue>,
}

impl<'a> JsIntegrand<'a> {
    fn new(func: &'a Function) -> Self {
        Self { func, error: None }
    }

    fn call(&mut self, x: f64) -> f64 {
        if self.error.is_some() {
            return f64::NAN;
        }
        match self.func.call1(&JsValue::NULL, &JsValue::from_f64(x)) {
            Ok(value) => match value.as_f64() {
                Some(y) => y,
                None => {
                    self.error = Some(JsValue::from_str(&format!(
                        "Integrand returned a non-numeric value at x = {}",
                        x
                    )));
                    f64::NAN
                }
            },
            Err(err) => {
                self.error = Some(err);
                f64::NAN
            }
        }
    }

    fn finish(self, result: f64) -> Result<f64, JsValue> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }
}

/// Settings as a JS object carries them: the count is a plain number and is
/// checked for being whole before it reaches the core.
#[derive(Deserialize)]
struct HostSettings {
    subintervals: Option<f64>,
}

fn failed(e: CalculusError) -> JsValue {
    JsValue::from_str(&format!("Integration failed: {}", e))
}

fn run(f: &Function, a: f64, b: f64, n: f64) -> Result<f64, JsValue> {
    let n = subintervals_from_f64(n).map_err(failed)?;
    let mut integrand = JsIntegrand::new(f);
    let result = Solver::integrate(|x| integrand.call(x), a, b, n).map_err(failed)?;
    integrand.finish(result)
}

/// Composite Simpson integral of `f` over `[a, b]` with `n` subintervals.
///
/// Throws when `n` is not a positive even whole number (before `f` is called),
/// or when `f` throws or returns something other than a number. Fractional
/// counts such as `2.5` are rejected, not truncated.
#[wasm_bindgen]
pub fn integrate(f: &Function, a: f64, b: f64, n: f64) -> Result<f64, JsValue> {
    console_error_panic_hook::set_once();
    run(f, a, b, n)
}

/// Like `integrate`, reading `{ subintervals }` from a settings object.
/// `undefined` or `null` settings use the default subinterval count.
#[wasm_bindgen]
pub fn integrate_with(f: &Function, a: f64, b: f64, settings: JsValue) -> Result<f64, JsValue> {
    console_error_panic_hook::set_once();
    let default = IntegrationSettings::default().subintervals as f64;
    let n = if settings.is_undefined() || settings.is_null() {
        default
    } else {
        let settings: HostSettings = from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        settings.subintervals.unwrap_or(default)
    };
    run(f, a, b, n)
}
