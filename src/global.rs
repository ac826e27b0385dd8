use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::DedicatedWorkerGlobalScope;

/// The host's global object, if there is one.
pub fn get_global_scope() -> Option<Object> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Some(scope.unchecked_into());
    }

    if let Some(window) = web_sys::window() {
        return Some(window.unchecked_into());
    }

    // Other hosts (Node, shells) still expose a plain globalThis
    let global = js_sys::global();
    if global.is_object() {
        Some(global)
    } else {
        None
    }
}

/// The `console` object of the global scope.
pub fn get_console() -> Option<Object> {
    let global = get_global_scope()?;
    Reflect::get(&global, &JsValue::from_str("console"))
        .ok()
        .filter(|console| console.is_object())
        .map(|console| console.unchecked_into())
}
