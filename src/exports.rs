use js_sys::{Date, Function, Object, Reflect};
use karmakazi_core::Throttle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::controllers;
use crate::dom_surface::js_err;

#[wasm_bindgen(inline_js = "export function gate_function(gate, f) { return function (...args) { if (gate()) { return f.apply(this, args); } }; }")]
extern "C" {
    /// JS wrapper that calls `f` with the caller's `this` and arguments
    /// whenever `gate()` admits the call.
    fn gate_function(gate: &Function, f: &Function) -> Function;
}

pub(crate) const EXPORT_GLOBAL: &str = "KarmakaziUtils";

type Initializer = fn() -> Result<(), String>;

/// Publishes `window.KarmakaziUtils` for other scripts on the page.
pub(crate) fn publish() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let exports = Object::new();
    Reflect::set(&exports, &JsValue::from_str("throttle"), &throttle_factory()).map_err(js_err)?;
    let initializers: [(&str, &'static str, Initializer); 4] = [
        ("initNavigation", "navigation", controllers::init_navigation),
        ("initScrollEffects", "scroll effects", controllers::init_scroll_effects),
        ("initAnimationPreviews", "animation previews", controllers::init_animation_previews),
        ("initPageTransitions", "page transitions", controllers::init_page_transitions),
    ];
    for (export, label, init) in initializers {
        Reflect::set(&exports, &JsValue::from_str(export), &initializer(label, init))
            .map_err(js_err)?;
    }
    Reflect::set(&window, &JsValue::from_str(EXPORT_GLOBAL), &exports).map_err(js_err)?;
    Ok(())
}

pub(crate) fn run_initializer(label: &str, init: Initializer) -> bool {
    match init() {
        Ok(()) => true,
        Err(err) => {
            gloo::console::error!(format!("{label} init failed: {err}"));
            false
        }
    }
}

fn initializer(label: &'static str, init: Initializer) -> JsValue {
    Closure::<dyn FnMut()>::new(move || {
        run_initializer(label, init);
    })
    .into_js_value()
}

fn throttle_factory() -> JsValue {
    Closure::<dyn FnMut(Function, f64) -> JsValue>::new(throttled_function).into_js_value()
}

/// Wraps a JS function so at most one call per `limit_ms` goes through.
/// The admitted call keeps its receiver and full argument list.
fn throttled_function(func: Function, limit_ms: f64) -> JsValue {
    let mut throttle = Throttle::new(limit_ms);
    let gate: Function = Closure::<dyn FnMut() -> bool>::new(move || throttle.admit(Date::now()))
        .into_js_value()
        .unchecked_into();
    gate_function(&gate, &func).into()
}
